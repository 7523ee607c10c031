use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::auth::{Claims, TokenService};
use crate::error::ApiError;

/// Authenticated identity, placed in request extensions by [`require_auth`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}

/// Gate for protected routes: no valid token, no handler.
///
/// Install with `axum::middleware::from_fn_with_state(tokens, require_auth)`.
pub async fn require_auth(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(request.headers())
        .ok_or_else(|| ApiError::unauthorized("Token not provided"))?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "rejected session token");
        ApiError::unauthorized("Invalid token")
    })?;

    request.extensions_mut().insert(AuthUser::from(claims));

    Ok(next.run(request).await)
}

/// Token from the Authorization header, with or without a `Bearer ` prefix.
fn extract_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = match value.strip_prefix("Bearer") {
        Some("") => "",
        Some(rest) if rest.starts_with(' ') => rest.trim(),
        _ => value,
    };

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
