//! Demo roster and tickets loaded on first start and by "clear all data".

use crate::domain::entities::{
    Activity, ActivityType, Agent, AgentStatus, Priority, Ticket, TicketStatus,
};
use chrono::{DateTime, Duration, Utc};

fn agent(id: &str, name: &str, email: &str, role: &str, department: &str) -> Agent {
    Agent {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        status: AgentStatus::Active,
        avatar: None,
    }
}

pub fn demo_agents() -> Vec<Agent> {
    vec![
        agent("1", "John Smith", "john@support.com", "Senior Agent", "Technical Support"),
        agent("2", "Sarah Wilson", "sarah@support.com", "Support Agent", "Billing"),
        agent("3", "Mike Chen", "mike@support.com", "Support Agent", "General"),
        agent("4", "Emily Brown", "emily@support.com", "Senior Agent", "Technical Support"),
        agent("5", "Jessica Taylor", "jessica@support.com", "Team Lead", "Customer Success"),
    ]
}

struct SeedTicket {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: TicketStatus,
    priority: Priority,
    assignee: &'static str,
    customer: &'static str,
    email: &'static str,
    created_ago: Duration,
    updated_ago: Duration,
    /// (kind, message, user, how long ago)
    activity: Vec<(ActivityType, &'static str, &'static str, Duration)>,
}

impl SeedTicket {
    fn build(self, now: DateTime<Utc>) -> Ticket {
        let activity = self
            .activity
            .into_iter()
            .enumerate()
            .map(|(i, (kind, message, user, ago))| Activity {
                id: (i + 1).to_string(),
                kind,
                message: message.to_string(),
                user: user.to_string(),
                timestamp: now - ago,
            })
            .collect();

        Ticket {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            status: self.status,
            priority: self.priority,
            assignee: self.assignee.to_string(),
            customer: self.customer.to_string(),
            email: self.email.to_string(),
            created_at: now - self.created_ago,
            updated_at: now - self.updated_ago,
            activity,
        }
    }
}

/// Five sample tickets spread over the last ten days, timed relative to `now`
pub fn demo_tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    use ActivityType::*;

    let day = Duration::days(1);
    let hour = Duration::hours(1);

    vec![
        SeedTicket {
            id: "1",
            title: "Unable to access account after password reset",
            description: "I reset my password yesterday but now I cannot log in. The system says my credentials are invalid.",
            status: TicketStatus::Open,
            priority: Priority::High,
            assignee: "John Smith",
            customer: "Alice Johnson",
            email: "alice@example.com",
            created_ago: day * 2,
            updated_ago: day * 2,
            activity: vec![
                (Created, "Ticket created", "Alice Johnson", day * 2),
                (Assigned, "Assigned to John Smith", "System", day * 2),
            ],
        },
        SeedTicket {
            id: "2",
            title: "Billing discrepancy on latest invoice",
            description: "My latest invoice shows charges that I do not recognize. The amount is $299 instead of the expected $199.",
            status: TicketStatus::Pending,
            priority: Priority::Medium,
            assignee: "Sarah Wilson",
            customer: "Bob Martinez",
            email: "bob@example.com",
            created_ago: day * 5,
            updated_ago: hour,
            activity: vec![
                (Created, "Ticket created", "Bob Martinez", day * 5),
                (StatusChange, "Status changed to pending", "Sarah Wilson", day * 4),
                (Comment, "Looking into this issue with the billing department", "Sarah Wilson", hour),
            ],
        },
        SeedTicket {
            id: "3",
            title: "Feature request: Dark mode support",
            description: "It would be great to have a dark mode option in the application for better usability at night.",
            status: TicketStatus::Resolved,
            priority: Priority::Low,
            assignee: "Mike Chen",
            customer: "Carol Davis",
            email: "carol@example.com",
            created_ago: day * 10,
            updated_ago: day * 3,
            activity: vec![
                (Created, "Ticket created", "Carol Davis", day * 10),
                (Comment, "Great suggestion! We will consider this for our next release", "Mike Chen", day * 8),
                (StatusChange, "Status changed to resolved", "Mike Chen", day * 3),
            ],
        },
        SeedTicket {
            id: "4",
            title: "API integration returning 500 errors",
            description: "Our integration with your API started failing yesterday with 500 errors. This is affecting our production system.",
            status: TicketStatus::Open,
            priority: Priority::High,
            assignee: "Emily Brown",
            customer: "Tech Corp Inc.",
            email: "support@techcorp.com",
            created_ago: hour * 3,
            updated_ago: hour * 2,
            activity: vec![
                (Created, "Ticket created", "Tech Corp Inc.", hour * 3),
                (Assigned, "Assigned to Emily Brown", "System", hour * 2),
            ],
        },
        SeedTicket {
            id: "5",
            title: "How to export data to CSV?",
            description: "I need to export my project data to a CSV file for reporting purposes. Is this feature available?",
            status: TicketStatus::Resolved,
            priority: Priority::Low,
            assignee: "John Smith",
            customer: "Diana Lee",
            email: "diana@example.com",
            created_ago: day * 7,
            updated_ago: day * 6,
            activity: vec![
                (Created, "Ticket created", "Diana Lee", day * 7),
                (Comment, "You can export data by going to Settings > Data > Export. I have closed this as it appears to be a how-to question.", "John Smith", day * 6),
                (StatusChange, "Status changed to resolved", "John Smith", day * 6),
            ],
        },
    ]
    .into_iter()
    .map(|seed| seed.build(now))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_seed_ticket_starts_with_created() {
        for ticket in demo_tickets(Utc::now()) {
            assert_eq!(ticket.activity[0].kind, ActivityType::Created);
            assert_eq!(ticket.activity[0].user, ticket.customer);
            assert!(ticket.created_at <= ticket.updated_at);
        }
    }

    #[test]
    fn test_seed_assignees_are_on_the_roster() {
        let agents = demo_agents();
        for ticket in demo_tickets(Utc::now()) {
            assert!(agents.iter().any(|a| a.name == ticket.assignee));
        }
    }
}
