use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, UpdateRoom},
        Room, RoomType,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub room_type: RoomType,
    #[garde(range(min = 1))]
    pub capacity: i32,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[garde(range(min = 0.0))]
    pub price_per_hour: Option<f64>,
    #[garde(skip)]
    pub amenities: Option<String>,
    #[garde(skip)]
    pub image_url: Option<String>,
}

fn default_available() -> bool {
    true
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            name,
            room_type,
            capacity,
            description,
            is_available,
            price_per_hour,
            amenities,
            image_url,
        } = value;
        Self {
            name,
            room_type,
            capacity,
            description,
            is_available,
            price_per_hour,
            amenities,
            image_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[garde(length(min = 1))]
    pub name: Option<String>,
    #[garde(skip)]
    pub room_type: Option<RoomType>,
    #[garde(range(min = 1))]
    pub capacity: Option<i32>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub is_available: Option<bool>,
    #[garde(range(min = 0.0))]
    pub price_per_hour: Option<f64>,
    #[garde(skip)]
    pub amenities: Option<String>,
    #[garde(skip)]
    pub image_url: Option<String>,
}

#[derive(new)]
pub struct UpdateRoomRequestWithId(RoomId, UpdateRoomRequest);

impl From<UpdateRoomRequestWithId> for UpdateRoom {
    fn from(value: UpdateRoomRequestWithId) -> Self {
        let UpdateRoomRequestWithId(
            room_id,
            UpdateRoomRequest {
                name,
                room_type,
                capacity,
                description,
                is_available,
                price_per_hour,
                amenities,
                image_url,
            },
        ) = value;
        Self {
            room_id,
            name,
            room_type,
            capacity,
            description,
            is_available,
            price_per_hour,
            amenities,
            image_url,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub room_id: RoomId,
    pub name: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub description: Option<String>,
    pub is_available: bool,
    pub price_per_hour: Option<f64>,
    pub amenities: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            room_id,
            name,
            room_type,
            capacity,
            description,
            is_available,
            price_per_hour,
            amenities,
            image_url,
            created_at,
            updated_at,
        } = value;
        Self {
            room_id,
            name,
            room_type,
            capacity,
            description,
            is_available,
            price_per_hour,
            amenities,
            image_url,
            created_at,
            updated_at,
        }
    }
}
