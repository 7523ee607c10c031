use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;

use crate::database::models::{Dino, DinoFields};
use crate::database::dinos;
use crate::error::{ApiError, FieldViolation};
use crate::middleware::validate::{Contract, FieldRule, Rule, Valid, ValidationContract};
use crate::middleware::AuthUser;
use crate::state::AppState;

const DINO_NOT_FOUND: &str = "Dino not found.";

#[derive(Debug, Deserialize)]
pub struct DinoPayload {
    pub name: String,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub period_id: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl Contract for DinoPayload {
    const CONTRACT: ValidationContract = ValidationContract::new(&[
        FieldRule { field: "name", rules: &[Rule::RequiredString] },
        FieldRule { field: "height", rules: &[Rule::OptionalString] },
        FieldRule { field: "weight", rules: &[Rule::OptionalString] },
        FieldRule { field: "period_id", rules: &[Rule::OptionalString] },
        FieldRule { field: "description", rules: &[Rule::OptionalString] },
        FieldRule { field: "image", rules: &[Rule::OptionalString] },
    ]);
}

/// Update body: the create fields plus the image path currently on file.
#[derive(Debug, Deserialize)]
pub struct DinoUpdatePayload {
    #[serde(flatten)]
    pub dino: DinoPayload,
    #[serde(rename = "oldImage")]
    pub old_image: Option<String>,
}

impl Contract for DinoUpdatePayload {
    const CONTRACT: ValidationContract = ValidationContract::new(&[
        FieldRule { field: "name", rules: &[Rule::RequiredString] },
        FieldRule { field: "height", rules: &[Rule::OptionalString] },
        FieldRule { field: "weight", rules: &[Rule::OptionalString] },
        FieldRule { field: "period_id", rules: &[Rule::OptionalString] },
        FieldRule { field: "description", rules: &[Rule::OptionalString] },
        FieldRule { field: "image", rules: &[Rule::OptionalString] },
        FieldRule { field: "oldImage", rules: &[Rule::OptionalString] },
    ]);
}

impl DinoPayload {
    fn into_fields(self, fallback_image: Option<String>) -> Result<DinoFields, ApiError> {
        let period_id = match self.period_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| unknown_period())?),
        };

        Ok(DinoFields {
            name: self.name,
            height: self.height.unwrap_or_default(),
            weight: self.weight.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            image: self.image.or(fallback_image).unwrap_or_default(),
            period_id,
        })
    }
}

fn unknown_period() -> ApiError {
    ApiError::validation(vec![FieldViolation::new(
        "period_id",
        "\"period_id\" must reference an existing period",
    )])
}

fn dino_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(error = %rejection, "bad dino id in path");
        ApiError::bad_request("Invalid dino id")
    })
}

/// GET /dinos - list every dino
pub async fn list_dinos(State(state): State<AppState>) -> Result<Json<Vec<Dino>>, ApiError> {
    Ok(Json(dinos::list(&state.pool).await?))
}

/// GET /dinos/:id - one dino, or 404
pub async fn get_dino(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Dino>, ApiError> {
    let id = dino_id(path)?;
    dinos::find(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(DINO_NOT_FOUND))
}

/// POST /dinos - create a dino
///
/// Expected Input:
/// ```json
/// {
///   "name": "Stegosaurus",          // Required
///   "height": "4m",
///   "weight": "5t",
///   "period_id": "2",
///   "description": "Plated herbivore",
///   "image": "/imgs/dinos/stego.png"
/// }
/// ```
pub async fn create_dino(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Valid(payload): Valid<DinoPayload>,
) -> Result<Json<Dino>, ApiError> {
    let fields = payload.into_fields(None)?;

    let dino = dinos::create(&state.pool, &fields).await.map_err(|e| {
        if e.is_foreign_key_violation() {
            unknown_period()
        } else {
            ApiError::from(e)
        }
    })?;

    tracing::info!(user_id = user.user_id, dino_id = dino.id, "dino created");
    Ok(Json(dino))
}

/// PUT /dinos/:id - replace a dino
///
/// Accepts the same body as POST /dinos plus `oldImage`, which is kept as
/// the image when no new `image` is supplied. A missing row is a 400.
pub async fn update_dino(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
    Valid(payload): Valid<DinoUpdatePayload>,
) -> Result<Json<Dino>, ApiError> {
    let id = dino_id(path)?;
    let fields = payload.dino.into_fields(payload.old_image)?;

    match dinos::update(&state.pool, id, &fields).await {
        Ok(Some(dino)) => {
            tracing::info!(user_id = user.user_id, dino_id = id, "dino updated");
            Ok(Json(dino))
        }
        Ok(None) => Err(ApiError::missing(DINO_NOT_FOUND)),
        Err(e) if e.is_foreign_key_violation() => Err(unknown_period()),
        Err(e) => {
            tracing::error!(error = %e, dino_id = id, "could not update dino");
            Err(ApiError::bad_request("Error in update dino"))
        }
    }
}

/// DELETE /dinos/:id - remove a dino; 204 on success, 400 when absent
pub async fn delete_dino(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = dino_id(path)?;

    if dinos::delete(&state.pool, id).await? {
        tracing::info!(user_id = user.user_id, dino_id = id, "dino deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::missing(DINO_NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(period_id: Option<&str>, image: Option<&str>) -> DinoPayload {
        DinoPayload {
            name: "Stegosaurus".into(),
            height: None,
            weight: Some("5t".into()),
            period_id: period_id.map(Into::into),
            description: None,
            image: image.map(Into::into),
        }
    }

    #[test]
    fn missing_optional_fields_default_to_empty() {
        let fields = payload(None, None).into_fields(None).unwrap();
        assert_eq!(fields.height, "");
        assert_eq!(fields.weight, "5t");
        assert_eq!(fields.period_id, None);
    }

    #[test]
    fn period_id_string_is_parsed() {
        assert_eq!(payload(Some(" 3 "), None).into_fields(None).unwrap().period_id, Some(3));
        assert!(payload(Some("three"), None).into_fields(None).is_err());
    }

    #[test]
    fn old_image_is_used_only_without_a_new_image() {
        let kept = payload(None, None).into_fields(Some("/old.png".into())).unwrap();
        assert_eq!(kept.image, "/old.png");

        let replaced = payload(None, Some("/new.png")).into_fields(Some("/old.png".into())).unwrap();
        assert_eq!(replaced.image, "/new.png");
    }
}
