use crate::model::booking::{Booking, BookingStatus};
use crate::model::id::RoomId;
use chrono::NaiveDate;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct RoomOccupancy {
    pub room_id: RoomId,
    pub room_name: String,
    pub total_bookings: i64,
    pub total_hours: i64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: BookingStatus,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyRevenue {
    pub date: NaiveDate,
    pub revenue: f64,
    pub bookings: i64,
}

const UNKNOWN_ROOM: &str = "Unknown room";

/// Per-room booking count, total hours and revenue over a window of bookings.
/// Cancelled bookings are skipped; each booking's duration is rounded to the
/// nearest whole hour before summing, and a missing price counts as zero.
/// Rows come back sorted by room name for stable output.
pub fn room_occupancy(
    bookings: &[Booking],
    room_names: &HashMap<RoomId, String>,
) -> Vec<RoomOccupancy> {
    let mut grouped: HashMap<RoomId, RoomOccupancy> = HashMap::new();

    for booking in bookings {
        if booking.status == BookingStatus::Cancelled {
            continue;
        }
        let entry = grouped
            .entry(booking.room_id)
            .or_insert_with(|| RoomOccupancy {
                room_id: booking.room_id,
                room_name: room_names
                    .get(&booking.room_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_ROOM.into()),
                total_bookings: 0,
                total_hours: 0,
                total_revenue: 0.0,
            });
        entry.total_bookings += 1;
        entry.total_hours += booking.period().duration_hours_rounded();
        entry.total_revenue += booking.total_price.unwrap_or(0.0);
    }

    let mut rows: Vec<RoomOccupancy> = grouped.into_values().collect();
    rows.sort_by(|a, b| {
        a.room_name
            .cmp(&b.room_name)
            .then_with(|| a.room_id.to_string().cmp(&b.room_id.to_string()))
    });
    rows
}

/// Booking counts per status. Unlike the other reports this one includes
/// cancelled bookings, since it reports counts by status; all four statuses
/// appear even when their count is zero.
pub fn status_distribution(bookings: &[Booking]) -> Vec<StatusCount> {
    BookingStatus::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            count: bookings.iter().filter(|b| b.status == status).count() as i64,
        })
        .collect()
}

/// Revenue and booking count per calendar day, keyed on the date portion of
/// each booking's start time, ascending by date. Cancelled bookings are skipped.
pub fn revenue_by_day(bookings: &[Booking]) -> Vec<DailyRevenue> {
    let mut grouped: HashMap<NaiveDate, (f64, i64)> = HashMap::new();

    for booking in bookings {
        if booking.status == BookingStatus::Cancelled {
            continue;
        }
        let entry = grouped.entry(booking.start_time.date_naive()).or_default();
        entry.0 += booking.total_price.unwrap_or(0.0);
        entry.1 += 1;
    }

    let mut rows: Vec<DailyRevenue> = grouped
        .into_iter()
        .map(|(date, (revenue, bookings))| DailyRevenue {
            date,
            revenue,
            bookings,
        })
        .collect();
    rows.sort_by_key(|row| row.date);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::{BookingId, ClientId, UserId};
    use chrono::{DateTime, TimeZone, Utc};

    fn booking(
        room_id: RoomId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        status: BookingStatus,
        total_price: Option<f64>,
    ) -> Booking {
        Booking {
            booking_id: BookingId::new(),
            room_id,
            client_id: ClientId::new(),
            start_time: start,
            end_time: end,
            status,
            purpose: None,
            attendees: None,
            total_price,
            notes: None,
            created_by: UserId::new(),
            created_at: start,
            updated_at: start,
            cancelled_at: None,
            cancel_reason: None,
        }
    }

    fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, day, hour, min, 0).unwrap()
    }

    #[test]
    fn occupancy_groups_by_room_and_skips_cancelled() {
        let room_a = RoomId::new();
        let room_b = RoomId::new();
        let names = HashMap::from([(room_a, "Alpha".to_string()), (room_b, "Beta".to_string())]);

        let bookings = vec![
            booking(room_a, at(10, 10, 0), at(10, 12, 0), BookingStatus::Confirmed, Some(80.0)),
            booking(room_a, at(11, 9, 0), at(11, 10, 30), BookingStatus::Pending, None),
            booking(room_b, at(10, 14, 0), at(10, 15, 0), BookingStatus::Completed, Some(40.0)),
            booking(room_b, at(12, 9, 0), at(12, 17, 0), BookingStatus::Cancelled, Some(320.0)),
        ];

        let rows = room_occupancy(&bookings, &names);
        assert_eq!(rows.len(), 2);

        let alpha = &rows[0];
        assert_eq!(alpha.room_name, "Alpha");
        assert_eq!(alpha.total_bookings, 2);
        // 2h + 1.5h rounded per booking: 2 + 2
        assert_eq!(alpha.total_hours, 4);
        assert_eq!(alpha.total_revenue, 80.0);

        let beta = &rows[1];
        assert_eq!(beta.room_name, "Beta");
        assert_eq!(beta.total_bookings, 1);
        assert_eq!(beta.total_hours, 1);
        assert_eq!(beta.total_revenue, 40.0);
    }

    #[test]
    fn occupancy_totals_reconcile_with_per_booking_durations() {
        let room = RoomId::new();
        let names = HashMap::new();
        let bookings = vec![
            booking(room, at(10, 10, 0), at(10, 11, 20), BookingStatus::Confirmed, None),
            booking(room, at(10, 13, 0), at(10, 14, 40), BookingStatus::Pending, None),
            booking(room, at(11, 9, 0), at(11, 9, 50), BookingStatus::Confirmed, None),
        ];

        let expected: i64 = bookings
            .iter()
            .map(|b| b.period().duration_hours_rounded())
            .sum();
        let rows = room_occupancy(&bookings, &names);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].room_name, "Unknown room");
        assert_eq!(rows[0].total_hours, expected);
    }

    #[test]
    fn status_distribution_counts_cancelled_and_reports_zeroes() {
        let room = RoomId::new();
        let bookings = vec![
            booking(room, at(10, 10, 0), at(10, 11, 0), BookingStatus::Pending, None),
            booking(room, at(10, 12, 0), at(10, 13, 0), BookingStatus::Pending, None),
            booking(room, at(11, 10, 0), at(11, 11, 0), BookingStatus::Cancelled, None),
        ];

        let rows = status_distribution(&bookings);
        assert_eq!(rows.len(), 4);
        let count_of = |status| rows.iter().find(|r| r.status == status).unwrap().count;
        assert_eq!(count_of(BookingStatus::Pending), 2);
        assert_eq!(count_of(BookingStatus::Confirmed), 0);
        assert_eq!(count_of(BookingStatus::Completed), 0);
        assert_eq!(count_of(BookingStatus::Cancelled), 1);
    }

    #[test]
    fn revenue_grouped_per_day_sorted_ascending() {
        let room = RoomId::new();
        let bookings = vec![
            booking(room, at(12, 9, 0), at(12, 10, 0), BookingStatus::Confirmed, Some(25.0)),
            booking(room, at(10, 10, 0), at(10, 11, 0), BookingStatus::Confirmed, Some(50.0)),
            booking(room, at(10, 15, 0), at(10, 16, 0), BookingStatus::Pending, None),
            booking(room, at(11, 10, 0), at(11, 11, 0), BookingStatus::Cancelled, Some(99.0)),
        ];

        let rows = revenue_by_day(&bookings);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, at(10, 0, 0).date_naive());
        assert_eq!(rows[0].revenue, 50.0);
        assert_eq!(rows[0].bookings, 2);
        assert_eq!(rows[1].date, at(12, 0, 0).date_naive());
        assert_eq!(rows[1].revenue, 25.0);
        assert_eq!(rows[1].bookings, 1);
    }
}
