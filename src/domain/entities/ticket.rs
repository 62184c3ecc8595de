use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Open,
    Pending,
    Resolved,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Open,
        TicketStatus::Pending,
        TicketStatus::Resolved,
    ];

    /// Position in the status sort (open first, resolved last)
    pub fn rank(&self) -> u8 {
        match self {
            TicketStatus::Open => 0,
            TicketStatus::Pending => 1,
            TicketStatus::Resolved => 2,
        }
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Open
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Open => write!(f, "open"),
            TicketStatus::Pending => write!(f, "pending"),
            TicketStatus::Resolved => write!(f, "resolved"),
        }
    }
}

impl std::str::FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(TicketStatus::Open),
            "pending" => Ok(TicketStatus::Pending),
            "resolved" => Ok(TicketStatus::Resolved),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid ticket status: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Position in the priority sort (high first, low last)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(DomainError::ValidationError(format!(
                "Invalid priority: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Created,
    Assigned,
    StatusChange,
    Updated,
    Comment,
}

impl Default for ActivityType {
    fn default() -> Self {
        ActivityType::Comment
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityType::Created => write!(f, "created"),
            ActivityType::Assigned => write!(f, "assigned"),
            ActivityType::StatusChange => write!(f, "status_change"),
            ActivityType::Updated => write!(f, "updated"),
            ActivityType::Comment => write!(f, "comment"),
        }
    }
}

/// One entry of a ticket's timeline. Entries are never edited once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub message: String,
    pub user: String,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    pub fn new(
        kind: ActivityType,
        message: impl Into<String>,
        user: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
            user: user.into(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: Priority,
    #[serde(default)]
    pub assignee: String,
    pub customer: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub activity: Vec<Activity>,
}

impl Ticket {
    /// Build a freshly opened ticket with its `created` timeline entry
    pub fn new(create: CreateTicket, now: DateTime<Utc>) -> Self {
        let created = Activity::new(
            ActivityType::Created,
            "Ticket created",
            create.customer.clone(),
            now,
        );

        Self {
            id: Uuid::new_v4().to_string(),
            title: create.title,
            description: create.description,
            status: TicketStatus::Open,
            priority: create.priority,
            assignee: create.assignee,
            customer: create.customer,
            email: create.email,
            created_at: now,
            updated_at: now,
            activity: vec![created],
        }
    }

    pub fn is_assigned(&self) -> bool {
        !self.assignee.trim().is_empty()
    }

    pub fn is_assigned_to(&self, agent_name: &str) -> bool {
        self.assignee == agent_name
    }

    pub fn last_activity(&self) -> Option<&Activity> {
        self.activity.last()
    }

    /// Append a timeline entry and bump `updated_at`
    pub(crate) fn record(&mut self, activity: Activity) {
        self.updated_at = activity.timestamp;
        self.activity.push(activity);
    }
}

/// Input of the create-ticket form. Status is never accepted from callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTicket {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assignee: String,
    pub customer: String,
    pub email: String,
}

/// Partial edit of a ticket; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub assignee: Option<String>,
    pub customer: Option<String>,
    pub email: Option<String>,
}

impl TicketPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
            && self.customer.is_none()
            && self.email.is_none()
    }

    pub(crate) fn apply_to(self, ticket: &mut Ticket) {
        if let Some(title) = self.title {
            ticket.title = title;
        }
        if let Some(description) = self.description {
            ticket.description = description;
        }
        if let Some(priority) = self.priority {
            ticket.priority = priority;
        }
        if let Some(assignee) = self.assignee {
            ticket.assignee = assignee;
        }
        if let Some(customer) = self.customer {
            ticket.customer = customer;
        }
        if let Some(email) = self.email {
            ticket.email = email;
        }
    }
}
