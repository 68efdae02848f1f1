use kernel::model::{
    id::RoomId,
    room::{Room, RoomType},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct RoomRow {
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

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
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
        Room {
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
