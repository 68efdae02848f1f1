use crate::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, DeleteRoom, UpdateRoom},
        Room,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, event: CreateRoom) -> AppResult<RoomId>;
    async fn find_all(&self) -> AppResult<Vec<Room>>;
    // rooms whose manual availability flag is on, regardless of schedule
    async fn find_available(&self) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
    async fn update(&self, event: UpdateRoom) -> AppResult<()>;
    async fn delete(&self, event: DeleteRoom) -> AppResult<()>;
}
