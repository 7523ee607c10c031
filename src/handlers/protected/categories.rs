use axum::{extract::State, Json};

use crate::database::{models::Period, periods};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /categories - every geological period a dino can belong to
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Period>>, ApiError> {
    Ok(Json(periods::list(&state.pool).await?))
}
