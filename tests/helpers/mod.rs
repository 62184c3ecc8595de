#![allow(unused_imports)]
#![allow(dead_code)]
pub mod test_store;
pub mod ticket_helpers;

pub use test_store::*;
pub use ticket_helpers::*;
