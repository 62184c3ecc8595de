pub mod clock;
pub mod key_value_store;

pub use clock::*;
pub use key_value_store::*;
