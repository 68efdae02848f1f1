use crate::{extractor::AuthorizedUser, model::notification::NotificationsResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::id::NotificationId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_notification_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<NotificationsResponse>> {
    registry
        .notification_repository()
        .find_by_user(user.id())
        .await
        .map(NotificationsResponse::from)
        .map(Json)
}

pub async fn show_unread_notification_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<NotificationsResponse>> {
    registry
        .notification_repository()
        .find_unread_by_user(user.id())
        .await
        .map(NotificationsResponse::from)
        .map(Json)
}

pub async fn mark_notification_as_read(
    _user: AuthorizedUser,
    Path(notification_id): Path<NotificationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .notification_repository()
        .mark_as_read(notification_id)
        .await
        .map(|_| StatusCode::OK)
}

pub async fn mark_all_notifications_as_read(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .notification_repository()
        .mark_all_as_read(user.id())
        .await
        .map(|_| StatusCode::OK)
}
