//! Checks applied where form input enters the system. The stores trust
//! whatever they are handed, so callers run these first.

use crate::domain::entities::{CreateAgent, CreateTicket, TicketPatch};
use crate::domain::errors::{DomainError, DomainResult};
use crate::shared::utils::email_validator::validate_and_normalize_email;

fn required(value: &str, message: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::ValidationError(message.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Validate the create-ticket form and return it with trimmed text and a
/// normalized email
pub fn validate_create_ticket(form: CreateTicket) -> DomainResult<CreateTicket> {
    Ok(CreateTicket {
        title: required(&form.title, "Title is required")?,
        description: required(&form.description, "Description is required")?,
        customer: required(&form.customer, "Customer name is required")?,
        email: validate_and_normalize_email(&form.email)?,
        assignee: form.assignee.trim().to_string(),
        priority: form.priority,
    })
}

/// Same rules as creation, applied only to the fields the patch sets
pub fn validate_ticket_patch(patch: TicketPatch) -> DomainResult<TicketPatch> {
    Ok(TicketPatch {
        title: patch
            .title
            .map(|t| required(&t, "Title is required"))
            .transpose()?,
        description: patch
            .description
            .map(|d| required(&d, "Description is required"))
            .transpose()?,
        customer: patch
            .customer
            .map(|c| required(&c, "Customer name is required"))
            .transpose()?,
        email: patch
            .email
            .map(|e| validate_and_normalize_email(&e))
            .transpose()?,
        assignee: patch.assignee.map(|a| a.trim().to_string()),
        priority: patch.priority,
    })
}

pub fn validate_create_agent(form: CreateAgent) -> DomainResult<CreateAgent> {
    Ok(CreateAgent {
        name: required(&form.name, "Name is required")?,
        email: validate_and_normalize_email(&form.email)?,
        role: form.role.trim().to_string(),
        department: form.department.trim().to_string(),
    })
}

/// Comments must carry some text
pub fn validate_comment(message: &str) -> DomainResult<String> {
    required(message, "Comment cannot be empty")
}
