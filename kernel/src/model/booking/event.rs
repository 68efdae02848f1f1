use crate::model::booking::BookingStatus;
use crate::model::id::{BookingId, ClientId, RoomId, UserId};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new)]
pub struct CreateBooking {
    pub room_id: RoomId,
    pub client_id: ClientId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub purpose: Option<String>,
    pub attendees: Option<i32>,
    pub total_price: Option<f64>,
    pub notes: Option<String>,
    pub created_by: UserId,
}

// Fields left as None are kept unchanged.
#[derive(new)]
pub struct UpdateBooking {
    pub booking_id: BookingId,
    pub room_id: Option<RoomId>,
    pub client_id: Option<ClientId>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<BookingStatus>,
    pub purpose: Option<String>,
    pub attendees: Option<i32>,
    pub total_price: Option<f64>,
    pub notes: Option<String>,
}

impl UpdateBooking {
    pub fn touches_schedule(&self) -> bool {
        self.room_id.is_some() || self.start_time.is_some() || self.end_time.is_some()
    }
}

#[derive(new)]
pub struct CancelBooking {
    pub booking_id: BookingId,
    pub reason: String,
}
