use crate::{
    extractor::AuthorizedUser,
    model::{
        booking::BookingsResponse,
        client::{
            ClientListQuery, ClientResponse, ClientsResponse, CreateClientRequest,
            CreateClientRequestWithUserId, UpdateClientRequest, UpdateClientRequestWithId,
        },
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{client::event::DeleteClient, id::ClientId};
use registry::AppRegistry;
use serde_json::json;
use shared::error::{AppError, AppResult};

pub async fn register_client(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateClientRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate(&())?;

    let create_client = CreateClientRequestWithUserId::new(user.id(), req);
    let client_id = registry
        .client_repository()
        .create(create_client.into())
        .await?;
    Ok((StatusCode::CREATED, Json(json!({ "clientId": client_id }))))
}

pub async fn show_client_list(
    _user: AuthorizedUser,
    Query(query): Query<ClientListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClientsResponse>> {
    let clients = match query.q.as_deref() {
        Some(q) if !q.trim().is_empty() => registry.client_repository().search(q).await?,
        _ => registry.client_repository().find_all().await?,
    };
    Ok(Json(clients.into()))
}

pub async fn show_client(
    _user: AuthorizedUser,
    Path(client_id): Path<ClientId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClientResponse>> {
    registry
        .client_repository()
        .find_by_id(client_id)
        .await
        .and_then(|client| match client {
            Some(client) => Ok(Json(client.into())),
            None => Err(AppError::EntityNotFound(format!(
                "client ({client_id}) not found"
            ))),
        })
}

pub async fn show_client_bookings(
    _user: AuthorizedUser,
    Path(client_id): Path<ClientId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_by_client(client_id)
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn update_client(
    _user: AuthorizedUser,
    Path(client_id): Path<ClientId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateClientRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_client = UpdateClientRequestWithId::new(client_id, req);
    registry
        .client_repository()
        .update(update_client.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_client(
    _user: AuthorizedUser,
    Path(client_id): Path<ClientId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    let delete_client = DeleteClient { client_id };
    registry
        .client_repository()
        .delete(delete_client)
        .await
        .map(|_| StatusCode::OK)
}
