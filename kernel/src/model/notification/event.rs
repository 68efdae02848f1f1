use crate::model::id::{BookingId, UserId};
use crate::model::notification::NotificationType;
use derive_new::new;

#[derive(new)]
pub struct CreateNotification {
    pub user_id: UserId,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub related_booking_id: Option<BookingId>,
}
