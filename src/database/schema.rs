use sqlx::SqlitePool;
use tracing::info;

use super::DatabaseError;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS periods (
        id   INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(20) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS dinos (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        name        VARCHAR(20) NOT NULL,
        height      VARCHAR(20) NOT NULL DEFAULT '',
        weight      VARCHAR(20) NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        image       VARCHAR(50) NOT NULL DEFAULT '',
        period_id   INTEGER REFERENCES periods (id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        name     VARCHAR(50) NOT NULL,
        email    VARCHAR(50) NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
    "#,
];

/// Create every table the API uses. Safe to run on an existing database.
pub async fn migrate(pool: &SqlitePool) -> Result<(), DatabaseError> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    info!(tables = STATEMENTS.len(), "schema is up to date");
    Ok(())
}
