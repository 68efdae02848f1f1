use axum::{
    routing::{get, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::notification::{
    mark_all_notifications_as_read, mark_notification_as_read, show_notification_list,
    show_unread_notification_list,
};

pub fn build_notification_routers() -> Router<AppRegistry> {
    let notification_routers = Router::new()
        .route("/", get(show_notification_list))
        .route("/unread", get(show_unread_notification_list))
        .route("/read-all", put(mark_all_notifications_as_read))
        .route("/:notification_id/read", put(mark_notification_as_read));

    Router::new().nest("/notifications", notification_routers)
}
