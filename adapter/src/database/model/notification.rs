use kernel::model::{
    id::{BookingId, NotificationId, UserId},
    notification::{Notification, NotificationType},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct NotificationRow {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub related_booking_id: Option<BookingId>,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(value: NotificationRow) -> Self {
        let NotificationRow {
            notification_id,
            user_id,
            notification_type,
            title,
            message,
            is_read,
            related_booking_id,
            created_at,
        } = value;
        Notification {
            notification_id,
            user_id,
            notification_type,
            title,
            message,
            is_read,
            related_booking_id,
            created_at,
        }
    }
}
