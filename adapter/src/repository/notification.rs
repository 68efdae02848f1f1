use crate::database::{model::notification::NotificationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{NotificationId, UserId},
    notification::{event::CreateNotification, Notification},
};
use kernel::repository::notification::NotificationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct NotificationRepositoryImpl {
    db: ConnectionPool,
}

const NOTIFICATION_COLUMNS: &str = r#"
    notification_id,
    user_id,
    notification_type,
    title,
    message,
    is_read,
    related_booking_id,
    created_at
"#;

#[async_trait]
impl NotificationRepository for NotificationRepositoryImpl {
    async fn create(&self, event: CreateNotification) -> AppResult<NotificationId> {
        let notification_id = NotificationId::new();
        sqlx::query(
            r#"
            INSERT INTO notifications
            (notification_id, user_id, notification_type, title, message, related_booking_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(notification_id)
        .bind(event.user_id)
        .bind(event.notification_type)
        .bind(&event.title)
        .bind(&event.message)
        .bind(event.related_booking_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(notification_id)
    }

    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, NotificationRow>(&format!(
            r#"
            SELECT {NOTIFICATION_COLUMNS}
            FROM notifications
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Notification::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_unread_by_user(&self, user_id: UserId) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, NotificationRow>(&format!(
            r#"
            SELECT {NOTIFICATION_COLUMNS}
            FROM notifications
            WHERE user_id = $1 AND is_read = FALSE
            ORDER BY created_at DESC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Notification::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn mark_as_read(&self, notification_id: NotificationId) -> AppResult<()> {
        let res = sqlx::query(
            "UPDATE notifications SET is_read = TRUE WHERE notification_id = $1",
        )
        .bind(notification_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "notification ({notification_id}) was not found"
            )));
        }

        Ok(())
    }

    async fn mark_all_as_read(&self, user_id: UserId) -> AppResult<()> {
        sqlx::query("UPDATE notifications SET is_read = TRUE WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }
}
