use crate::{
    extractor::AuthorizedUser,
    model::room::{
        CreateRoomRequest, RoomResponse, RoomsResponse, UpdateRoomRequest, UpdateRoomRequestWithId,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::RoomId, room::event::DeleteRoom};
use registry::AppRegistry;
use serde_json::json;
use shared::error::{AppError, AppResult};

pub async fn register_room(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let room_id = registry.room_repository().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(json!({ "roomId": room_id }))))
}

pub async fn show_room_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .room_repository()
        .find_all()
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

pub async fn show_available_room_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .room_repository()
        .find_available()
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

pub async fn show_room(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound(format!(
                "room ({room_id}) not found"
            ))),
        })
}

pub async fn update_room(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateRoomRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let update_room = UpdateRoomRequestWithId::new(room_id, req);
    registry
        .room_repository()
        .update(update_room.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_room(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let delete_room = DeleteRoom { room_id };
    registry
        .room_repository()
        .delete(delete_room)
        .await
        .map(|_| StatusCode::OK)
}
