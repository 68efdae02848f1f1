use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::report::{occupancy_report, revenue_report, status_distribution_report};

pub fn build_report_routers() -> Router<AppRegistry> {
    let report_routers = Router::new()
        .route("/occupancy", get(occupancy_report))
        .route("/status-distribution", get(status_distribution_report))
        .route("/revenue", get(revenue_report));

    Router::new().nest("/reports", report_routers)
}
