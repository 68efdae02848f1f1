use crate::database::{model::room::RoomRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, DeleteRoom, UpdateRoom},
        Room,
    },
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

const ROOM_COLUMNS: &str = r#"
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
    updated_at
"#;

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<RoomId> {
        let room_id = RoomId::new();
        sqlx::query(
            r#"
            INSERT INTO rooms
            (room_id, name, room_type, capacity, description,
             is_available, price_per_hour, amenities, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(room_id)
        .bind(&event.name)
        .bind(event.room_type)
        .bind(event.capacity)
        .bind(&event.description)
        .bind(event.is_available)
        .bind(event.price_per_hour)
        .bind(&event.amenities)
        .bind(&event.image_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(room_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms ORDER BY name"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Room::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_available(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE is_available = TRUE ORDER BY name"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Room::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE room_id = $1"
        ))
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Room::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<()> {
        let res = sqlx::query(
            r#"
            UPDATE rooms
            SET
                name = COALESCE($2, name),
                room_type = COALESCE($3, room_type),
                capacity = COALESCE($4, capacity),
                description = COALESCE($5, description),
                is_available = COALESCE($6, is_available),
                price_per_hour = COALESCE($7, price_per_hour),
                amenities = COALESCE($8, amenities),
                image_url = COALESCE($9, image_url),
                updated_at = CURRENT_TIMESTAMP
            WHERE room_id = $1
            "#,
        )
        .bind(event.room_id)
        .bind(&event.name)
        .bind(event.room_type)
        .bind(event.capacity)
        .bind(&event.description)
        .bind(event.is_available)
        .bind(event.price_per_hour)
        .bind(&event.amenities)
        .bind(&event.image_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "room ({}) was not found",
                event.room_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteRoom) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM rooms WHERE room_id = $1")
            .bind(event.room_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "room ({}) was not found",
                event.room_id
            )));
        }

        Ok(())
    }
}
