use crate::model::id::RoomId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(Debug, Clone)]
pub struct Room {
    pub room_id: RoomId,
    pub name: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub description: Option<String>,
    // manually toggled flag, independent of the booking schedule
    pub is_available: bool,
    pub price_per_hour: Option<f64>,
    pub amenities: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(type_name = "room_type", rename_all = "lowercase")]
pub enum RoomType {
    Meeting,
    Conference,
    Training,
    Office,
    Event,
}
