use crate::model::{
    booking::{
        event::{CancelBooking, CreateBooking, UpdateBooking},
        Booking, Period,
    },
    id::{BookingId, ClientId, RoomId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Creates a booking in `pending` state. The availability check and the
    /// insert run inside one SERIALIZABLE transaction so that of two racing
    /// conflicting creates at most one commits; the loser gets a schedule
    /// conflict error.
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    /// Applies a partial patch. When the patch touches room or time window the
    /// merged schedule is re-checked against other bookings, excluding this
    /// booking's own id.
    async fn update(&self, event: UpdateBooking) -> AppResult<()>;
    /// Marks a booking cancelled with a reason. Re-cancelling is not an error.
    async fn cancel(&self, event: CancelBooking) -> AppResult<()>;
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;
    // window filter on start_time, both endpoints inclusive
    async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>>;
    async fn find_by_room(&self, room_id: RoomId) -> AppResult<Vec<Booking>>;
    async fn find_by_client(&self, client_id: ClientId) -> AppResult<Vec<Booking>>;
    /// True iff no non-cancelled booking for the room (minus the excluded id)
    /// overlaps the period under the inclusive-boundary test.
    async fn check_availability(
        &self,
        room_id: RoomId,
        period: Period,
        exclude_booking_id: Option<BookingId>,
    ) -> AppResult<bool>;
}
