use std::path::Path;

use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;

use super::{periods, DatabaseError};

/// Contents of the JSON seed file.
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub periods: Vec<PeriodSeed>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodSeed {
    pub name: String,
}

impl SeedData {
    pub fn from_file(path: &Path) -> Result<Self, DatabaseError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatabaseError::SeedFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Insert every seeded row. Returns how many rows were written.
pub async fn apply(pool: &SqlitePool, data: &SeedData) -> Result<usize, DatabaseError> {
    let mut tx = pool.begin().await?;
    for period in &data.periods {
        sqlx::query("INSERT INTO periods (name) VALUES (?)")
            .bind(&period.name)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    info!(periods = data.periods.len(), "seed data applied");
    Ok(data.periods.len())
}
