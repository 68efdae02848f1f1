use crate::model::{
    id::{NotificationId, UserId},
    notification::{event::CreateNotification, Notification},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, event: CreateNotification) -> AppResult<NotificationId>;
    async fn find_by_user(&self, user_id: UserId) -> AppResult<Vec<Notification>>;
    async fn find_unread_by_user(&self, user_id: UserId) -> AppResult<Vec<Notification>>;
    async fn mark_as_read(&self, notification_id: NotificationId) -> AppResult<()>;
    async fn mark_all_as_read(&self, user_id: UserId) -> AppResult<()>;
}
