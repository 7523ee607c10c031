use sqlx::SqlitePool;

use super::models::Period;
use super::DatabaseError;

pub async fn list(pool: &SqlitePool) -> Result<Vec<Period>, DatabaseError> {
    let periods = sqlx::query_as::<_, Period>("SELECT id, name FROM periods ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(periods)
}

pub async fn create(pool: &SqlitePool, name: &str) -> Result<Period, DatabaseError> {
    let period = sqlx::query_as::<_, Period>(
        "INSERT INTO periods (name) VALUES (?) RETURNING id, name",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;
    Ok(period)
}
