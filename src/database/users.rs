use async_trait::async_trait;
use sqlx::SqlitePool;

use super::models::{Credential, User};
use super::DatabaseError;
use crate::auth::CredentialStore;

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, DatabaseError> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email, password) VALUES (?, ?, ?)
         RETURNING id, name, email, password",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, DatabaseError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[async_trait]
impl CredentialStore for SqlitePool {
    async fn find_credential(&self, email: &str) -> Result<Option<Credential>, DatabaseError> {
        Ok(find_by_email(self, email).await?.map(Credential::from))
    }
}
