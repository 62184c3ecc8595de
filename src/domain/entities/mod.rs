pub mod agent;
pub mod theme;
pub mod ticket;

pub use agent::*;
pub use theme::*;
pub use ticket::*;
