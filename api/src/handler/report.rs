use crate::{
    extractor::AuthorizedUser,
    model::report::{
        OccupancyReportResponse, ReportQuery, RevenueReportResponse, StatusDistributionResponse,
    },
};
use axum::{
    extract::{Query, State},
    Json,
};
use kernel::model::report::{revenue_by_day, room_occupancy, status_distribution};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use std::collections::HashMap;

pub async fn occupancy_report(
    _user: AuthorizedUser,
    Query(query): Query<ReportQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<OccupancyReportResponse>> {
    validate_window(&query)?;

    let bookings = registry
        .booking_repository()
        .find_by_date_range(query.start, query.end)
        .await?;
    let room_names: HashMap<_, _> = registry
        .room_repository()
        .find_all()
        .await?
        .into_iter()
        .map(|room| (room.room_id, room.name))
        .collect();

    Ok(Json(room_occupancy(&bookings, &room_names).into()))
}

pub async fn status_distribution_report(
    _user: AuthorizedUser,
    Query(query): Query<ReportQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<StatusDistributionResponse>> {
    validate_window(&query)?;

    let bookings = registry
        .booking_repository()
        .find_by_date_range(query.start, query.end)
        .await?;
    Ok(Json(status_distribution(&bookings).into()))
}

pub async fn revenue_report(
    _user: AuthorizedUser,
    Query(query): Query<ReportQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RevenueReportResponse>> {
    validate_window(&query)?;

    let bookings = registry
        .booking_repository()
        .find_by_date_range(query.start, query.end)
        .await?;
    Ok(Json(revenue_by_day(&bookings).into()))
}

fn validate_window(query: &ReportQuery) -> AppResult<()> {
    if query.start >= query.end {
        return Err(AppError::UnprocessableEntity(
            "start must be before end".into(),
        ));
    }
    Ok(())
}
