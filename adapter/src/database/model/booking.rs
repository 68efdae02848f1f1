use kernel::model::{
    booking::{Booking, BookingStatus, Period},
    id::{BookingId, ClientId, RoomId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub client_id: ClientId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub purpose: Option<String>,
    pub attendees: Option<i32>,
    pub total_price: Option<f64>,
    pub notes: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancel_reason: Option<String>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            room_id,
            client_id,
            start_time,
            end_time,
            status,
            purpose,
            attendees,
            total_price,
            notes,
            created_by,
            created_at,
            updated_at,
            cancelled_at,
            cancel_reason,
        } = value;
        Booking {
            booking_id,
            room_id,
            client_id,
            start_time,
            end_time,
            status,
            purpose,
            attendees,
            total_price,
            notes,
            created_by,
            created_at,
            updated_at,
            cancelled_at,
            cancel_reason,
        }
    }
}

// Projection used by the conflict check: the stored interval plus what is
// needed to rule a candidate out (its id and status).
#[derive(sqlx::FromRow)]
pub struct BookedPeriodRow {
    pub booking_id: BookingId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
}

impl BookedPeriodRow {
    pub fn period(&self) -> Period {
        Period::new(self.start_time, self.end_time)
    }

    /// Whether this stored booking makes the probed period unavailable.
    /// Cancelled bookings never block, a booking never blocks itself when its
    /// own id is excluded, and otherwise the inclusive-boundary overlap test
    /// decides.
    pub fn blocks(&self, period: &Period, exclude_booking_id: Option<BookingId>) -> bool {
        if self.status == BookingStatus::Cancelled {
            return false;
        }
        if exclude_booking_id == Some(self.booking_id) {
            return false;
        }
        self.period().overlaps(period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 10, hour, 0, 0).unwrap()
    }

    fn row(start: DateTime<Utc>, end: DateTime<Utc>, status: BookingStatus) -> BookedPeriodRow {
        BookedPeriodRow {
            booking_id: BookingId::new(),
            start_time: start,
            end_time: end,
            status,
        }
    }

    #[test]
    fn cancelled_booking_never_blocks() {
        let cancelled = row(at(9), at(10), BookingStatus::Cancelled);
        let probe = Period::new(at(9), at(10));
        assert!(!cancelled.blocks(&probe, None));
    }

    #[test]
    fn booking_does_not_block_itself_when_excluded() {
        let stored = row(at(10), at(12), BookingStatus::Confirmed);
        let probe = Period::new(at(10), at(12));
        assert!(stored.blocks(&probe, None));
        assert!(!stored.blocks(&probe, Some(stored.booking_id)));
        // excluding a different booking must not suppress the conflict
        assert!(stored.blocks(&probe, Some(BookingId::new())));
    }

    #[test]
    fn active_overlap_blocks_and_disjoint_does_not() {
        let stored = row(at(10), at(12), BookingStatus::Pending);
        assert!(stored.blocks(&Period::new(at(11), at(13)), None));
        // touching at the boundary still conflicts
        assert!(stored.blocks(&Period::new(at(12), at(13)), None));
        assert!(!stored.blocks(&Period::new(at(13), at(14)), None));
    }
}
