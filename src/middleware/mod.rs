pub mod auth;
pub mod validate;

pub use auth::{require_auth, AuthUser};
pub use validate::{Contract, FieldRule, Rule, Valid, ValidationContract};
