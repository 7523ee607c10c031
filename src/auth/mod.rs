//! Credential checks and session tokens.

pub mod password;
pub mod signin;
pub mod token;

pub use signin::{sign_in, CredentialStore, SignInResponse, SIGN_IN_FAILURE_MESSAGE};
pub use token::{Claims, TokenError, TokenService, TOKEN_TTL_SECS};
