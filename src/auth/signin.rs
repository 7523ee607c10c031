use async_trait::async_trait;
use serde::Serialize;

use super::{password, TokenService};
use crate::database::models::Credential;
use crate::database::DatabaseError;
use crate::error::ApiError;

/// The one message for every failed sign-in, whatever the cause.
pub const SIGN_IN_FAILURE_MESSAGE: &str = "User not found";

/// Read access to stored credentials, keyed by email.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_credential(&self, email: &str) -> Result<Option<Credential>, DatabaseError>;
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SignInResponse {
    pub auth: bool,
    pub token: String,
}

/// Verify `email`/`password` and issue a session token.
///
/// Unknown email and wrong password fail identically. Store and signing
/// failures are unclassified.
pub async fn sign_in(
    store: &dyn CredentialStore,
    tokens: &TokenService,
    email: &str,
    password: &str,
) -> Result<SignInResponse, ApiError> {
    let credential = match store.find_credential(email).await? {
        Some(credential) => credential,
        None => {
            tracing::info!(email, "sign-in rejected");
            return Err(ApiError::unauthorized(SIGN_IN_FAILURE_MESSAGE));
        }
    };

    let plaintext = password.to_owned();
    let stored_hash = credential.password_hash.clone();
    let matches =
        tokio::task::spawn_blocking(move || password::verify(&plaintext, &stored_hash)).await?;

    if !matches {
        tracing::info!(email, "sign-in rejected");
        return Err(ApiError::unauthorized(SIGN_IN_FAILURE_MESSAGE));
    }

    let token = tokens.issue(credential.user_id).map_err(ApiError::internal)?;
    tracing::info!(user_id = credential.user_id, "session token issued");

    Ok(SignInResponse { auth: true, token })
}
