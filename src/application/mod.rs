pub mod queries;
pub mod seed;
pub mod services;
