use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::password;
use crate::database::{models::User, users};
use crate::error::ApiError;
use crate::middleware::validate::{Contract, FieldRule, Rule, Valid, ValidationContract};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirmation_password: Option<String>,
}

impl Contract for CreateUserRequest {
    const CONTRACT: ValidationContract = ValidationContract::new(&[
        FieldRule { field: "name", rules: &[Rule::RequiredString] },
        FieldRule { field: "email", rules: &[Rule::RequiredString, Rule::Email] },
        FieldRule { field: "password", rules: &[Rule::RequiredString, Rule::MinLength(8)] },
        FieldRule { field: "confirmation_password", rules: &[Rule::OptionalString, Rule::MinLength(8)] },
    ]);
}

/// POST /users - Create a user account
///
/// Expected Input:
/// ```json
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "password": "at-least-8",
///   "confirmation_password": "at-least-8"
/// }
/// ```
///
/// Returns the stored `{ id, name, email }`. A taken email answers
/// `400 { "error": "Email already exists" }`.
pub async fn create_user(
    State(state): State<AppState>,
    Valid(request): Valid<CreateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let plaintext = request.password;
    let hash = tokio::task::spawn_blocking(move || password::hash(&plaintext))
        .await?
        .map_err(|e| {
            tracing::error!(error = %e, "could not hash password");
            ApiError::bad_request("Error in create user")
        })?;

    match users::create(&state.pool, &request.name, &request.email, &hash).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "user created");
            Ok(Json(user))
        }
        Err(e) if e.is_unique_violation() => Err(ApiError::conflict("Email already exists")),
        Err(e) => {
            tracing::error!(error = %e, "could not create user");
            Err(ApiError::bad_request("Error in create user"))
        }
    }
}
