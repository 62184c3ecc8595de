use ticketdesk::bootstrap::{self, Desk};
use ticketdesk::config::Config;
use ticketdesk::infrastructure::observability;
use ticketdesk::queries::{agent_recent_tickets, AGENT_RECENT_TICKETS};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    observability::init(&config)?;
    tracing::info!("Configuration loaded: backend={:?}", config.storage_backend);

    let store = bootstrap::open_store(&config).await?;
    let desk = Desk::open_with_config(store, &config).await?;

    let dashboard = desk.dashboard();
    tracing::info!(
        "Tickets: total={}, open={}, pending={}, resolved={}, high={}",
        dashboard.stats.total,
        dashboard.stats.open,
        dashboard.stats.pending,
        dashboard.stats.resolved,
        dashboard.stats.high
    );
    tracing::info!(
        "Agents: total={}, active={}, inactive={}",
        dashboard.agents.total,
        dashboard.agents.active,
        dashboard.agents.inactive
    );

    for workload in &dashboard.workloads {
        tracing::info!(
            "{}: {} tickets ({} open, {} pending, {} resolved), {}% complete",
            workload.agent.name,
            workload.total(),
            workload.open.len(),
            workload.pending.len(),
            workload.resolved.len(),
            workload.completion_rate()
        );
        for ticket in agent_recent_tickets(workload.agent, desk.tickets.tickets(), AGENT_RECENT_TICKETS) {
            tracing::info!("  recent: {} [{}]", ticket.title, ticket.status);
        }
    }

    for ticket in &dashboard.priority_queue {
        tracing::warn!(
            "High priority {}: {} ({}, assignee={})",
            ticket.status,
            ticket.title,
            ticket.customer,
            if ticket.is_assigned() { ticket.assignee.as_str() } else { "nobody" }
        );
    }

    tracing::info!("Theme: {}", desk.preferences.theme());
    Ok(())
}
