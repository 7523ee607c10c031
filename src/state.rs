use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::auth::TokenService;

/// Shared, read-only per-process state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenService) -> Self {
        Self { pool, tokens }
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
