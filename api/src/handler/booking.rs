use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        AvailabilityQuery, AvailabilityResponse, BookingListQuery, BookingResponse,
        BookingsResponse, CancelBookingRequest, CreateBookingRequest,
        CreateBookingRequestWithUserId, UpdateBookingRequest, UpdateBookingRequestWithId,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::{event::CancelBooking, Period},
    id::{BookingId, UserId},
    notification::{event::CreateNotification, NotificationType},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;
    if req.start_time >= req.end_time {
        return Err(AppError::UnprocessableEntity(
            "startTime must be before endTime".into(),
        ));
    }

    let create_booking = CreateBookingRequestWithUserId::new(user.id(), req);
    let booking_id = registry
        .booking_repository()
        .create(create_booking.into())
        .await?;

    notify(
        &registry,
        user.id(),
        NotificationType::BookingCreated,
        "Booking created",
        format!("Your booking ({booking_id}) has been created and is pending confirmation."),
        booking_id,
    )
    .await;

    let booking = registry
        .booking_repository()
        .find_by_id(booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("booking ({booking_id}) not found")))?;

    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn show_booking_list(
    _user: AuthorizedUser,
    Query(query): Query<BookingListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    let repo = registry.booking_repository();
    let bookings = if let Some(room_id) = query.room_id {
        repo.find_by_room(room_id).await?
    } else if let Some(client_id) = query.client_id {
        repo.find_by_client(client_id).await?
    } else if let (Some(start), Some(end)) = (query.start, query.end) {
        repo.find_by_date_range(start, end).await?
    } else {
        repo.find_all().await?
    };
    Ok(Json(bookings.into()))
}

pub async fn show_booking(
    _user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_id(booking_id)
        .await
        .and_then(|booking| match booking {
            Some(booking) => Ok(Json(booking.into())),
            None => Err(AppError::EntityNotFound(format!(
                "booking ({booking_id}) not found"
            ))),
        })
}

pub async fn check_availability(
    _user: AuthorizedUser,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AvailabilityResponse>> {
    if query.start_time >= query.end_time {
        return Err(AppError::UnprocessableEntity(
            "startTime must be before endTime".into(),
        ));
    }

    let period = Period::new(query.start_time, query.end_time);
    let available = registry
        .booking_repository()
        .check_availability(query.room_id, period, query.exclude_booking_id)
        .await?;
    Ok(Json(AvailabilityResponse { available }))
}

pub async fn update_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBookingRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_booking = UpdateBookingRequestWithId::new(booking_id, req);
    registry
        .booking_repository()
        .update(update_booking.into())
        .await?;

    notify(
        &registry,
        user.id(),
        NotificationType::BookingUpdated,
        "Booking updated",
        format!("Your booking ({booking_id}) has been updated."),
        booking_id,
    )
    .await;

    Ok(StatusCode::OK)
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CancelBookingRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let cancel_booking = CancelBooking::new(booking_id, req.reason);
    registry.booking_repository().cancel(cancel_booking).await?;

    notify(
        &registry,
        user.id(),
        NotificationType::BookingCancelled,
        "Booking cancelled",
        format!("Your booking ({booking_id}) has been cancelled."),
        booking_id,
    )
    .await;

    Ok(StatusCode::OK)
}

// A failed notification write must not fail the booking mutation it follows,
// so the error is logged and swallowed here.
async fn notify(
    registry: &AppRegistry,
    user_id: UserId,
    notification_type: NotificationType,
    title: &str,
    message: String,
    booking_id: BookingId,
) {
    let event = CreateNotification::new(
        user_id,
        notification_type,
        title.into(),
        message,
        Some(booking_id),
    );
    if let Err(e) = registry.notification_repository().create(event).await {
        tracing::warn!(
            error.cause_chain = ?e,
            booking_id = %booking_id,
            "failed to record booking notification"
        );
    }
}
