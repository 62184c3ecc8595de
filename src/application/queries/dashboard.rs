use crate::application::queries::ticket_filter::{sort_tickets, SortOrder};
use crate::application::queries::workload::{agent_workloads, AgentWorkload};
use crate::domain::entities::{Agent, AgentStatus, Priority, Ticket, TicketStatus};
use serde::Serialize;

/// Number of tickets in the dashboard's "recent" panel
pub const RECENT_TICKETS: usize = 5;

/// Headline counters. Computed fresh from the collection on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub pending: usize,
    pub resolved: usize,
    pub high: usize,
}

impl TicketStats {
    pub fn compute(tickets: &[Ticket]) -> Self {
        tickets.iter().fold(
            TicketStats {
                total: tickets.len(),
                ..Default::default()
            },
            |mut stats, ticket| {
                match ticket.status {
                    TicketStatus::Open => stats.open += 1,
                    TicketStatus::Pending => stats.pending += 1,
                    TicketStatus::Resolved => stats.resolved += 1,
                }
                if ticket.priority == Priority::High {
                    stats.high += 1;
                }
                stats
            },
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgentCounts {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl AgentCounts {
    pub fn compute(agents: &[Agent]) -> Self {
        let active = agents
            .iter()
            .filter(|a| a.status == AgentStatus::Active)
            .count();
        Self {
            total: agents.len(),
            active,
            inactive: agents.len() - active,
        }
    }
}

/// The `limit` most recently created tickets, newest first
pub fn recent_tickets(tickets: &[Ticket], limit: usize) -> Vec<&Ticket> {
    let mut recent: Vec<&Ticket> = tickets.iter().collect();
    sort_tickets(&mut recent, SortOrder::Newest);
    recent.truncate(limit);
    recent
}

/// High priority tickets still waiting on someone
pub fn priority_queue(tickets: &[Ticket]) -> Vec<&Ticket> {
    tickets
        .iter()
        .filter(|t| t.priority == Priority::High && t.status != TicketStatus::Resolved)
        .collect()
}

/// Everything the dashboard page renders
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub stats: TicketStats,
    pub agents: AgentCounts,
    pub recent: Vec<&'a Ticket>,
    pub priority_queue: Vec<&'a Ticket>,
    pub workloads: Vec<AgentWorkload<'a>>,
}

impl<'a> Dashboard<'a> {
    pub fn build(tickets: &'a [Ticket], agents: &'a [Agent]) -> Self {
        Self {
            stats: TicketStats::compute(tickets),
            agents: AgentCounts::compute(agents),
            recent: recent_tickets(tickets, RECENT_TICKETS),
            priority_queue: priority_queue(tickets),
            workloads: agent_workloads(agents, tickets),
        }
    }
}
