pub mod agent_service;
pub mod preference_service;
pub mod snapshot;
pub mod ticket_service;

pub use agent_service::AgentService;
pub use preference_service::PreferenceService;
pub use ticket_service::{TicketService, SYSTEM_USER};
