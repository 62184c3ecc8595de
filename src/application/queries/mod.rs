//! Read-only views over the ticket and agent collections. Nothing here is
//! cached; every call walks the slices it is given.

pub mod dashboard;
pub mod ticket_filter;
pub mod workload;

pub use dashboard::*;
pub use ticket_filter::*;
pub use workload::*;
