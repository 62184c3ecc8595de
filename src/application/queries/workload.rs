use crate::domain::entities::{Agent, Ticket, TicketStatus};
use serde::Serialize;

/// Tickets currently assigned to one agent, split by status
#[derive(Debug, Clone, Serialize)]
pub struct AgentWorkload<'a> {
    pub agent: &'a Agent,
    pub open: Vec<&'a Ticket>,
    pub pending: Vec<&'a Ticket>,
    pub resolved: Vec<&'a Ticket>,
}

impl<'a> AgentWorkload<'a> {
    /// Match is on the exact agent name; tickets naming a removed agent
    /// simply belong to nobody
    pub fn for_agent(agent: &'a Agent, tickets: &'a [Ticket]) -> Self {
        let mut workload = Self {
            agent,
            open: Vec::new(),
            pending: Vec::new(),
            resolved: Vec::new(),
        };

        for ticket in tickets.iter().filter(|t| t.is_assigned_to(&agent.name)) {
            match ticket.status {
                TicketStatus::Open => workload.open.push(ticket),
                TicketStatus::Pending => workload.pending.push(ticket),
                TicketStatus::Resolved => workload.resolved.push(ticket),
            }
        }

        workload
    }

    pub fn total(&self) -> usize {
        self.open.len() + self.pending.len() + self.resolved.len()
    }

    /// Percentage of assigned tickets that are resolved, rounded half-up;
    /// 0 for an agent with nothing assigned
    pub fn completion_rate(&self) -> u32 {
        completion_rate(self.resolved.len(), self.total())
    }
}

pub fn completion_rate(resolved: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((resolved as f64 / total as f64) * 100.0).round() as u32
}

/// Tickets an agent card lists under its workload
pub const AGENT_RECENT_TICKETS: usize = 2;

/// The agent's most recently touched tickets, by `updated_at` descending.
/// Ties keep collection order.
pub fn agent_recent_tickets<'a>(agent: &Agent, tickets: &'a [Ticket], limit: usize) -> Vec<&'a Ticket> {
    let mut assigned: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.is_assigned_to(&agent.name))
        .collect();
    assigned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    assigned.truncate(limit);
    assigned
}

/// One workload per agent, in roster order
pub fn agent_workloads<'a>(agents: &'a [Agent], tickets: &'a [Ticket]) -> Vec<AgentWorkload<'a>> {
    agents
        .iter()
        .map(|agent| AgentWorkload::for_agent(agent, tickets))
        .collect()
}

/// Tickets whose assignee is empty or names no current agent
pub fn unowned_tickets<'a>(agents: &[Agent], tickets: &'a [Ticket]) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| !agents.iter().any(|a| t.is_assigned_to(&a.name)))
        .collect()
}
