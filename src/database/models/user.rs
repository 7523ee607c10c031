use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string. Never serialized into responses.
    #[serde(skip_serializing)]
    pub password: String,
}

/// What the sign-in flow needs from a stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub user_id: i64,
    pub email: String,
    pub password_hash: String,
}

impl From<User> for Credential {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            password_hash: user.password,
        }
    }
}
