use crate::model::id::{BookingId, ClientId, RoomId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(Debug, Clone)]
pub struct Booking {
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

impl Booking {
    pub fn period(&self) -> Period {
        Period::new(self.start_time, self.end_time)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    // Allowed moves: pending -> confirmed/cancelled, confirmed -> completed/cancelled.
    // Completed and cancelled are terminal. Writing the current status back is a no-op
    // and always allowed.
    pub fn can_transition_to(self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        match (self, next) {
            (current, next) if current == next => true,
            (Pending, Confirmed | Cancelled) => true,
            (Confirmed, Completed | Cancelled) => true,
            _ => false,
        }
    }
}

/// A wall-clock interval as entered by the caller. The overlap test is
/// inclusive at both boundaries: two periods touching exactly at an endpoint
/// count as a conflict, so back-to-back bookings on the same room are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Period {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, other: &Period) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    // Each booking's duration is rounded to the nearest whole hour on its own,
    // not summed fractionally and rounded once.
    pub fn duration_hours_rounded(&self) -> i64 {
        let minutes = (self.end - self.start).num_minutes();
        (minutes as f64 / 60.0).round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 10, hour, min, 0).unwrap()
    }

    #[rstest]
    #[case(at(10, 0), at(12, 0), at(11, 0), at(13, 0), true)] // partial overlap
    #[case(at(10, 0), at(12, 0), at(12, 0), at(13, 0), true)] // touching boundary conflicts
    #[case(at(10, 0), at(12, 0), at(10, 30), at(11, 30), true)] // containment
    #[case(at(10, 0), at(11, 0), at(11, 30), at(12, 0), false)] // disjoint with gap
    #[case(at(13, 0), at(14, 0), at(10, 0), at(11, 0), false)] // disjoint, reversed order
    fn overlap_policy(
        #[case] a0: DateTime<Utc>,
        #[case] a1: DateTime<Utc>,
        #[case] b0: DateTime<Utc>,
        #[case] b1: DateTime<Utc>,
        #[case] expected: bool,
    ) {
        let a = Period::new(a0, a1);
        let b = Period::new(b0, b1);
        assert_eq!(a.overlaps(&b), expected);
        // symmetry must hold for every pair
        assert_eq!(b.overlaps(&a), expected);
    }

    #[rstest]
    #[case(at(10, 0), at(12, 0), 2)]
    #[case(at(10, 0), at(11, 30), 2)] // 1.5h rounds up
    #[case(at(10, 0), at(10, 20), 0)] // 20min rounds down
    #[case(at(10, 0), at(10, 45), 1)]
    fn duration_rounds_to_nearest_hour(
        #[case] start: DateTime<Utc>,
        #[case] end: DateTime<Utc>,
        #[case] expected: i64,
    ) {
        assert_eq!(Period::new(start, end).duration_hours_rounded(), expected);
    }

    #[rstest]
    #[case(BookingStatus::Pending, BookingStatus::Confirmed, true)]
    #[case(BookingStatus::Pending, BookingStatus::Cancelled, true)]
    #[case(BookingStatus::Pending, BookingStatus::Completed, false)]
    #[case(BookingStatus::Confirmed, BookingStatus::Completed, true)]
    #[case(BookingStatus::Confirmed, BookingStatus::Cancelled, true)]
    #[case(BookingStatus::Confirmed, BookingStatus::Pending, false)]
    #[case(BookingStatus::Completed, BookingStatus::Pending, false)]
    #[case(BookingStatus::Completed, BookingStatus::Cancelled, false)]
    #[case(BookingStatus::Cancelled, BookingStatus::Pending, false)]
    #[case(BookingStatus::Confirmed, BookingStatus::Confirmed, true)]
    fn status_transitions(
        #[case] from: BookingStatus,
        #[case] to: BookingStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
    }
}
