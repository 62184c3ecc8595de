use crate::application::services::snapshot::{read_snapshot, write_snapshot, Snapshot};
use crate::domain::entities::{
    Activity, ActivityType, CreateTicket, Ticket, TicketPatch, TicketStatus,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::clock::Clock;
use crate::domain::ports::key_value_store::KeyValueStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Author recorded on entries the store writes on its own behalf
pub const SYSTEM_USER: &str = "System";

/// Owns the ticket collection and writes a full snapshot after every change.
///
/// A mutation is built on a copy of the collection and only swapped in once
/// the snapshot write succeeded, so a failed call never leaves a partial
/// change behind. Unknown ids are reported as [`DomainError::NotFound`].
pub struct TicketService {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    key: String,
    tickets: Vec<Ticket>,
}

impl TicketService {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        key: impl Into<String>,
        tickets: Vec<Ticket>,
    ) -> Self {
        Self {
            store,
            clock,
            key: key.into(),
            tickets,
        }
    }

    /// Read the persisted collection, or start from `seed` when nothing
    /// usable was saved
    pub async fn load<F>(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        key: impl Into<String>,
        seed: F,
    ) -> DomainResult<Self>
    where
        F: FnOnce() -> Vec<Ticket>,
    {
        let key = key.into();
        let tickets = match read_snapshot::<Ticket>(store.as_ref(), &key).await? {
            Snapshot::Loaded(mut tickets) => {
                repair_timelines(&mut tickets);
                tracing::info!("Loaded {} tickets from {}", tickets.len(), key);
                tickets
            }
            Snapshot::Missing => {
                let tickets = seed();
                tracing::info!("No saved tickets, starting with {}", tickets.len());
                tickets
            }
            Snapshot::Unreadable(reason) => {
                tracing::warn!("Saved tickets under {} are unreadable ({}); using seed data", key, reason);
                seed()
            }
        };

        Ok(Self::new(store, clock, key, tickets))
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Open a new ticket. The form is expected to be validated already.
    pub async fn create(&mut self, data: CreateTicket) -> DomainResult<Ticket> {
        let ticket = Ticket::new(data, self.clock.now());

        let mut next = Vec::with_capacity(self.tickets.len() + 1);
        next.push(ticket.clone());
        next.extend(self.tickets.iter().cloned());
        self.commit(next).await?;

        metrics::counter!("tickets_created_total").increment(1);
        tracing::info!(
            "Ticket created: id={}, priority={}, customer={}",
            ticket.id,
            ticket.priority,
            ticket.customer
        );
        Ok(ticket)
    }

    /// Merge `patch` into the ticket and log an `updated` entry
    pub async fn update(&mut self, id: &str, patch: TicketPatch) -> DomainResult<Ticket> {
        let updated = self
            .mutate(id, |ticket, now| {
                patch.apply_to(ticket);
                ticket.record(Activity::new(
                    ActivityType::Updated,
                    "Ticket updated",
                    SYSTEM_USER,
                    now,
                ));
            })
            .await?;

        tracing::info!("Ticket updated: id={}", id);
        Ok(updated)
    }

    /// Move the ticket to `status`. Every status is reachable from every other.
    pub async fn update_status(
        &mut self,
        id: &str,
        status: TicketStatus,
        user: &str,
    ) -> DomainResult<Ticket> {
        let mut previous = None;
        let updated = self
            .mutate(id, |ticket, now| {
                previous = Some(ticket.status);
                ticket.status = status;
                ticket.record(Activity::new(
                    ActivityType::StatusChange,
                    format!("Status changed to {}", status),
                    user,
                    now,
                ));
            })
            .await?;

        metrics::counter!("ticket_status_changes_total").increment(1);
        tracing::info!(
            "Ticket {} status changed from {:?} to {} by {}",
            id,
            previous,
            status,
            user
        );
        Ok(updated)
    }

    /// Hand the ticket to `assignee` (an agent name; empty clears it)
    pub async fn assign(&mut self, id: &str, assignee: &str, user: &str) -> DomainResult<Ticket> {
        let assignee = assignee.trim();
        let message = if assignee.is_empty() {
            "Unassigned".to_string()
        } else {
            format!("Assigned to {}", assignee)
        };

        let updated = self
            .mutate(id, |ticket, now| {
                ticket.assignee = assignee.to_string();
                ticket.record(Activity::new(ActivityType::Assigned, message, user, now));
            })
            .await?;

        tracing::info!("Ticket {} assigned to {:?} by {}", id, assignee, user);
        Ok(updated)
    }

    /// Append a timeline entry; only `updated_at` changes besides the log
    pub async fn add_activity(
        &mut self,
        id: &str,
        message: &str,
        user: &str,
        kind: ActivityType,
    ) -> DomainResult<Ticket> {
        self.mutate(id, |ticket, now| {
            ticket.record(Activity::new(kind, message, user, now));
        })
        .await
    }

    pub async fn add_comment(&mut self, id: &str, message: &str, user: &str) -> DomainResult<Ticket> {
        self.add_activity(id, message, user, ActivityType::Comment)
            .await
    }

    pub async fn delete(&mut self, id: &str) -> DomainResult<()> {
        self.position(id)?;

        let next: Vec<Ticket> = self
            .tickets
            .iter()
            .filter(|t| t.id != id)
            .cloned()
            .collect();
        self.commit(next).await?;

        metrics::counter!("tickets_deleted_total").increment(1);
        tracing::info!("Ticket deleted: id={}", id);
        Ok(())
    }

    /// Replace the whole collection, e.g. with the demo tickets
    pub async fn reset(&mut self, mut tickets: Vec<Ticket>) -> DomainResult<()> {
        repair_timelines(&mut tickets);
        self.commit(tickets).await?;
        tracing::info!("Ticket collection reset to {} tickets", self.tickets.len());
        Ok(())
    }

    /// Pretty-printed JSON of every ticket, for download
    pub fn export_json(&self) -> DomainResult<String> {
        Ok(serde_json::to_string_pretty(&self.tickets)?)
    }

    fn position(&self, id: &str) -> DomainResult<usize> {
        self.tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Ticket {} not found", id)))
    }

    async fn mutate<F>(&mut self, id: &str, apply: F) -> DomainResult<Ticket>
    where
        F: FnOnce(&mut Ticket, DateTime<Utc>),
    {
        let index = self.position(id)?;

        let mut next = self.tickets.clone();
        apply(&mut next[index], self.clock.now());
        let updated = next[index].clone();

        self.commit(next).await?;
        Ok(updated)
    }

    async fn commit(&mut self, next: Vec<Ticket>) -> DomainResult<()> {
        write_snapshot(self.store.as_ref(), &self.key, &next).await?;
        self.tickets = next;
        Ok(())
    }
}

/// Give any ticket without a timeline its `created` entry back
fn repair_timelines(tickets: &mut [Ticket]) {
    for ticket in tickets.iter_mut().filter(|t| t.activity.is_empty()) {
        tracing::warn!("Ticket {} had no activity; restoring its created entry", ticket.id);
        ticket.activity.push(Activity::new(
            ActivityType::Created,
            "Ticket created",
            ticket.customer.clone(),
            ticket.created_at,
        ));
    }
}
