use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::auth::{sign_in, SignInResponse, SIGN_IN_FAILURE_MESSAGE};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /signin - Exchange email and password for a session token
///
/// Expected Input:
/// ```json
/// { "email": "ada@example.com", "password": "correct horse" }
/// ```
///
/// Expected Output (Success):
/// ```json
/// { "auth": true, "token": "eyJhbGciOiJIUzI1NiI..." }
/// ```
///
/// Every failure (unreadable body, unknown email, wrong password) answers
/// `401 { "error": "User not found" }`.
pub async fn signin(
    State(state): State<AppState>,
    body: Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<SignInResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "unreadable sign-in body");
        ApiError::unauthorized(SIGN_IN_FAILURE_MESSAGE)
    })?;

    let response = sign_in(&state.pool, &state.tokens, &request.email, &request.password).await?;
    Ok(Json(response))
}
