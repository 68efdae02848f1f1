use kernel::model::{id::UserId, role::Role, user::User};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub last_signed_in: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            name,
            email,
            role,
            created_at,
            last_signed_in,
        } = value;
        User {
            user_id,
            name,
            email,
            role,
            created_at,
            last_signed_in,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct UserCredentialRow {
    pub user_id: UserId,
    pub password_hash: String,
}
