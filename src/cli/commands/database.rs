use std::path::PathBuf;

use crate::config::AppConfig;
use crate::database::{self, schema, seed::SeedData};

pub async fn migrate(config: &AppConfig) -> anyhow::Result<()> {
    let pool = database::connect(&config.database.url, config.database.max_connections).await?;
    schema::migrate(&pool).await?;
    pool.close().await;
    Ok(())
}

pub async fn seed(config: &AppConfig, file: Option<PathBuf>) -> anyhow::Result<()> {
    let path = file.unwrap_or_else(|| config.database.seed_file.clone());
    let data = SeedData::from_file(&path)?;

    let pool = database::connect(&config.database.url, config.database.max_connections).await?;
    schema::migrate(&pool).await?;
    let rows = database::seed::apply(&pool, &data).await?;
    pool.close().await;

    tracing::info!(rows, path = %path.display(), "seeding finished");
    Ok(())
}
