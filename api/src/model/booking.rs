use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking, BookingStatus,
    },
    id::{BookingId, ClientId, RoomId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(skip)]
    pub client_id: ClientId,
    #[garde(skip)]
    pub start_time: DateTime<Utc>,
    #[garde(skip)]
    pub end_time: DateTime<Utc>,
    #[garde(skip)]
    pub purpose: Option<String>,
    #[garde(range(min = 1))]
    pub attendees: Option<i32>,
    #[garde(range(min = 0.0))]
    pub total_price: Option<f64>,
    #[garde(skip)]
    pub notes: Option<String>,
}

#[derive(new)]
pub struct CreateBookingRequestWithUserId(UserId, CreateBookingRequest);

impl From<CreateBookingRequestWithUserId> for CreateBooking {
    fn from(value: CreateBookingRequestWithUserId) -> Self {
        let CreateBookingRequestWithUserId(
            created_by,
            CreateBookingRequest {
                room_id,
                client_id,
                start_time,
                end_time,
                purpose,
                attendees,
                total_price,
                notes,
            },
        ) = value;
        Self {
            room_id,
            client_id,
            start_time,
            end_time,
            purpose,
            attendees,
            total_price,
            notes,
            created_by,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[garde(skip)]
    pub room_id: Option<RoomId>,
    #[garde(skip)]
    pub client_id: Option<ClientId>,
    #[garde(skip)]
    pub start_time: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub end_time: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub status: Option<BookingStatus>,
    #[garde(skip)]
    pub purpose: Option<String>,
    #[garde(range(min = 1))]
    pub attendees: Option<i32>,
    #[garde(range(min = 0.0))]
    pub total_price: Option<f64>,
    #[garde(skip)]
    pub notes: Option<String>,
}

#[derive(new)]
pub struct UpdateBookingRequestWithId(BookingId, UpdateBookingRequest);

impl From<UpdateBookingRequestWithId> for UpdateBooking {
    fn from(value: UpdateBookingRequestWithId) -> Self {
        let UpdateBookingRequestWithId(
            booking_id,
            UpdateBookingRequest {
                room_id,
                client_id,
                start_time,
                end_time,
                status,
                purpose,
                attendees,
                total_price,
                notes,
            },
        ) = value;
        Self {
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
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CancelBookingRequest {
    #[garde(length(min = 1))]
    pub reason: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    #[garde(skip)]
    pub start: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub end: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub room_id: Option<RoomId>,
    #[garde(skip)]
    pub client_id: Option<ClientId>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(skip)]
    pub start_time: DateTime<Utc>,
    #[garde(skip)]
    pub end_time: DateTime<Utc>,
    // set when rescheduling so a booking does not collide with itself
    #[garde(skip)]
    pub exclude_booking_id: Option<BookingId>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub available: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
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

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
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
        Self {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_booking_request_reads_camel_case_fields() {
        let json = r#"{
            "roomId": "018f4f60-5f0a-7b5e-b6a1-2d3b4c5d6e7f",
            "clientId": "018f4f60-5f0a-7b5e-b6a1-2d3b4c5d6e80",
            "startTime": "2026-09-01T09:00:00Z",
            "endTime": "2026-09-01T10:00:00Z",
            "totalPrice": 120.0
        }"#;

        let req: CreateBookingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.total_price, Some(120.0));
        assert!(req.purpose.is_none());
        assert!(req.start_time < req.end_time);
    }

    #[test]
    fn update_request_merges_into_patch_event() {
        let booking_id = BookingId::new();
        let req = UpdateBookingRequest {
            room_id: None,
            client_id: None,
            start_time: None,
            end_time: None,
            status: Some(BookingStatus::Confirmed),
            purpose: None,
            attendees: Some(8),
            total_price: None,
            notes: None,
        };

        let event: kernel::model::booking::event::UpdateBooking =
            UpdateBookingRequestWithId::new(booking_id, req).into();
        assert_eq!(event.booking_id, booking_id);
        assert_eq!(event.status, Some(BookingStatus::Confirmed));
        assert_eq!(event.attendees, Some(8));
        assert!(!event.touches_schedule());
    }
}
