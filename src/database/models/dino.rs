use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Dino {
    pub id: i64,
    pub name: String,
    pub height: String,
    pub weight: String,
    pub description: String,
    pub image: String,
    pub period_id: Option<i64>,
}

/// Column values for an insert or a full update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DinoFields {
    pub name: String,
    pub height: String,
    pub weight: String,
    pub description: String,
    pub image: String,
    pub period_id: Option<i64>,
}
