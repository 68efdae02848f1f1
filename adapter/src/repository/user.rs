use crate::database::{
    model::user::{UserCredentialRow, UserRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let existing = sqlx::query_as::<_, UserCredentialRow>(
            "SELECT user_id, password_hash FROM users WHERE email = $1",
        )
        .bind(&event.email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if existing.is_some() {
            return Err(AppError::UnprocessableEntity(
                "email is already registered".into(),
            ));
        }

        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (user_id, name, email, password_hash, role)
            VALUES ($1, $2, $3, $4, 'user')
            RETURNING user_id, name, email, role, created_at, last_signed_in
            "#,
        )
        .bind(user_id)
        .bind(&event.name)
        .bind(&event.email)
        .bind(&password_hash)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(User::from(row))
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            r#"
            SELECT user_id, name, email, role, created_at, last_signed_in
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(User::from))
        .map_err(AppError::SpecificOperationError)
    }
}
