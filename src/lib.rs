pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::queries;
pub use application::services::*;
pub use bootstrap::{Desk, DeskOptions};
pub use config::*;
pub use domain::entities::*;
pub use domain::errors::{DomainError, DomainResult};
