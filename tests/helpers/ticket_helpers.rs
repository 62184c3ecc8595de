use chrono::{Duration, Utc};
use ticketdesk::domain::entities::{CreateAgent, CreateTicket, Priority, Ticket, TicketStatus};

pub fn ticket_form(title: &str, description: &str, customer: &str, email: &str) -> CreateTicket {
    CreateTicket {
        title: title.to_string(),
        description: description.to_string(),
        priority: Priority::default(),
        assignee: String::new(),
        customer: customer.to_string(),
        email: email.to_string(),
    }
}

pub fn simple_form(title: &str) -> CreateTicket {
    ticket_form(title, "Something broke", "Carol Davis", "carol@example.com")
}

pub fn assigned_form(title: &str, priority: Priority, assignee: &str) -> CreateTicket {
    CreateTicket {
        priority,
        assignee: assignee.to_string(),
        ..simple_form(title)
    }
}

pub fn agent_form(name: &str) -> CreateAgent {
    CreateAgent {
        name: name.to_string(),
        email: format!("{}@support.com", name.split_whitespace().next().unwrap_or("agent").to_lowercase()),
        role: "Support Agent".to_string(),
        department: "General".to_string(),
    }
}

/// Detached ticket for view tests; `age_hours` is how long ago it was opened
pub fn make_ticket(title: &str, status: TicketStatus, priority: Priority, age_hours: i64) -> Ticket {
    let mut ticket = Ticket::new(
        CreateTicket {
            priority,
            ..simple_form(title)
        },
        Utc::now() - Duration::hours(age_hours),
    );
    ticket.status = status;
    ticket
}

pub fn ids(tickets: &[&Ticket]) -> Vec<String> {
    tickets.iter().map(|t| t.id.clone()).collect()
}

/// Every ordering of `items` (Heap's algorithm)
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    fn heap<T: Clone>(k: usize, items: &mut Vec<T>, out: &mut Vec<Vec<T>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            if k % 2 == 0 {
                items.swap(i, k - 1);
            } else {
                items.swap(0, k - 1);
            }
            heap(k - 1, items, out);
        }
    }

    let mut items = items.to_vec();
    let mut out = Vec::new();
    let len = items.len();
    heap(len, &mut items, &mut out);
    out
}
