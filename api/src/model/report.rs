use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::BookingStatus,
    id::RoomId,
    report::{DailyRevenue, RoomOccupancy, StatusCount},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    #[garde(skip)]
    pub start: DateTime<Utc>,
    #[garde(skip)]
    pub end: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyReportResponse {
    pub items: Vec<RoomOccupancyResponse>,
}

impl From<Vec<RoomOccupancy>> for OccupancyReportResponse {
    fn from(value: Vec<RoomOccupancy>) -> Self {
        Self {
            items: value.into_iter().map(RoomOccupancyResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOccupancyResponse {
    pub room_id: RoomId,
    pub room_name: String,
    pub total_bookings: i64,
    pub total_hours: i64,
    pub total_revenue: f64,
}

impl From<RoomOccupancy> for RoomOccupancyResponse {
    fn from(value: RoomOccupancy) -> Self {
        let RoomOccupancy {
            room_id,
            room_name,
            total_bookings,
            total_hours,
            total_revenue,
        } = value;
        Self {
            room_id,
            room_name,
            total_bookings,
            total_hours,
            total_revenue,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDistributionResponse {
    pub items: Vec<StatusCountResponse>,
}

impl From<Vec<StatusCount>> for StatusDistributionResponse {
    fn from(value: Vec<StatusCount>) -> Self {
        Self {
            items: value.into_iter().map(StatusCountResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountResponse {
    pub status: BookingStatus,
    pub count: i64,
}

impl From<StatusCount> for StatusCountResponse {
    fn from(value: StatusCount) -> Self {
        let StatusCount { status, count } = value;
        Self { status, count }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReportResponse {
    pub items: Vec<DailyRevenueResponse>,
}

impl From<Vec<DailyRevenue>> for RevenueReportResponse {
    fn from(value: Vec<DailyRevenue>) -> Self {
        Self {
            items: value.into_iter().map(DailyRevenueResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenueResponse {
    pub date: NaiveDate,
    pub revenue: f64,
    pub bookings: i64,
}

impl From<DailyRevenue> for DailyRevenueResponse {
    fn from(value: DailyRevenue) -> Self {
        let DailyRevenue {
            date,
            revenue,
            bookings,
        } = value;
        Self {
            date,
            revenue,
            bookings,
        }
    }
}
