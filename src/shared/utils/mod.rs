/// Validation applied at the form boundary
pub mod email_validator;
pub mod form_validator;

pub use email_validator::*;
pub use form_validator::*;
