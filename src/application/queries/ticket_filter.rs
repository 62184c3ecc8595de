use crate::domain::entities::{Priority, Ticket, TicketStatus};
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// List filter. `None` stands for the "all" choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<Priority>,
    pub search: String,
}

impl TicketFilter {
    /// Build from the strings the list page carries in its query parameters
    pub fn from_params(status: &str, priority: &str, search: &str) -> DomainResult<Self> {
        Ok(Self {
            status: parse_choice(status)?,
            priority: parse_choice(priority)?,
            search: search.to_string(),
        })
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn matches(&self, ticket: &Ticket) -> bool {
        if let Some(status) = self.status {
            if ticket.status != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if ticket.priority != priority {
                return false;
            }
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            &ticket.title,
            &ticket.description,
            &ticket.customer,
            &ticket.email,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn parse_choice<T>(value: &str) -> DomainResult<Option<T>>
where
    T: std::str::FromStr<Err = DomainError>,
{
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
    Priority,
    Status,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Newest
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Oldest => write!(f, "oldest"),
            SortOrder::Priority => write!(f, "priority"),
            SortOrder::Status => write!(f, "status"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "priority" => Ok(SortOrder::Priority),
            "status" => Ok(SortOrder::Status),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid sort order: {}",
                s
            ))),
        }
    }
}

pub fn filter_tickets<'a>(tickets: &'a [Ticket], filter: &TicketFilter) -> Vec<&'a Ticket> {
    tickets.iter().filter(|t| filter.matches(t)).collect()
}

/// Stable sort: tickets that compare equal keep their relative order
pub fn sort_tickets(tickets: &mut [&Ticket], order: SortOrder) {
    match order {
        SortOrder::Newest => tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => tickets.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Priority => tickets.sort_by_key(|t| t.priority.rank()),
        SortOrder::Status => tickets.sort_by_key(|t| t.status.rank()),
    }
}

/// Filter, then sort
pub fn apply<'a>(tickets: &'a [Ticket], filter: &TicketFilter, order: SortOrder) -> Vec<&'a Ticket> {
    let mut result = filter_tickets(tickets, filter);
    sort_tickets(&mut result, order);
    result
}
