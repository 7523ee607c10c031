use sqlx::SqlitePool;

use super::models::{Dino, DinoFields};
use super::DatabaseError;

const COLUMNS: &str = "id, name, height, weight, description, image, period_id";

pub async fn list(pool: &SqlitePool) -> Result<Vec<Dino>, DatabaseError> {
    let dinos = sqlx::query_as::<_, Dino>(&format!("SELECT {COLUMNS} FROM dinos ORDER BY id"))
        .fetch_all(pool)
        .await?;
    Ok(dinos)
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Dino>, DatabaseError> {
    let dino = sqlx::query_as::<_, Dino>(&format!("SELECT {COLUMNS} FROM dinos WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(dino)
}

pub async fn create(pool: &SqlitePool, fields: &DinoFields) -> Result<Dino, DatabaseError> {
    let dino = sqlx::query_as::<_, Dino>(&format!(
        "INSERT INTO dinos (name, height, weight, description, image, period_id)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING {COLUMNS}"
    ))
    .bind(&fields.name)
    .bind(&fields.height)
    .bind(&fields.weight)
    .bind(&fields.description)
    .bind(&fields.image)
    .bind(fields.period_id)
    .fetch_one(pool)
    .await?;
    Ok(dino)
}

/// Replace every column of row `id`. `None` when the row does not exist.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    fields: &DinoFields,
) -> Result<Option<Dino>, DatabaseError> {
    let dino = sqlx::query_as::<_, Dino>(&format!(
        "UPDATE dinos
         SET name = ?, height = ?, weight = ?, description = ?, image = ?, period_id = ?
         WHERE id = ?
         RETURNING {COLUMNS}"
    ))
    .bind(&fields.name)
    .bind(&fields.height)
    .bind(&fields.weight)
    .bind(&fields.description)
    .bind(&fields.image)
    .bind(fields.period_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(dino)
}

/// Delete row `id`; false when nothing was deleted.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, DatabaseError> {
    let result = sqlx::query("DELETE FROM dinos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
