use chrono::{DateTime, Utc};
use kernel::model::{
    id::{BookingId, NotificationId, UserId},
    notification::{Notification, NotificationType},
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsResponse {
    pub items: Vec<NotificationResponse>,
}

impl From<Vec<Notification>> for NotificationsResponse {
    fn from(value: Vec<Notification>) -> Self {
        Self {
            items: value.into_iter().map(NotificationResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub notification_id: NotificationId,
    pub user_id: UserId,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    pub related_booking_id: Option<BookingId>,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(value: Notification) -> Self {
        let Notification {
            notification_id,
            user_id,
            notification_type,
            title,
            message,
            is_read,
            related_booking_id,
            created_at,
        } = value;
        Self {
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
