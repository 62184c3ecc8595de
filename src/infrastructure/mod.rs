pub mod observability;
pub mod persistence;
pub mod storage;
