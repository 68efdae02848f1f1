use crate::model::id::RoomId;
use crate::model::room::RoomType;
use derive_new::new;

#[derive(new)]
pub struct CreateRoom {
    pub name: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub description: Option<String>,
    pub is_available: bool,
    pub price_per_hour: Option<f64>,
    pub amenities: Option<String>,
    pub image_url: Option<String>,
}

#[derive(new)]
pub struct UpdateRoom {
    pub room_id: RoomId,
    pub name: Option<String>,
    pub room_type: Option<RoomType>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub is_available: Option<bool>,
    pub price_per_hour: Option<f64>,
    pub amenities: Option<String>,
    pub image_url: Option<String>,
}

#[derive(new)]
pub struct DeleteRoom {
    pub room_id: RoomId,
}
