use crate::database::{
    model::booking::{BookedPeriodRow, BookingRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::booking::{
    event::{CancelBooking, CreateBooking, UpdateBooking},
    Booking, Period,
};
use kernel::model::id::{BookingId, ClientId, RoomId};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};
use sqlx::PgConnection;

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

const BOOKING_COLUMNS: &str = r#"
    booking_id,
    room_id,
    client_id,
    start_time,
    end_time,
    status,
    purpose,
    attendees,
    total_price,
    notes,
    created_by,
    created_at,
    updated_at,
    cancelled_at,
    cancel_reason
"#;

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // The availability read and the insert must commit atomically, otherwise
        // two racing creates can both observe "available" and double-book the
        // room. SERIALIZABLE makes the loser fail instead of corrupting state.
        set_transaction_serializable(&mut tx).await?;

        let period = Period::new(event.start_time, event.end_time);
        {
            // the referenced room must exist before any schedule check
            let room = sqlx::query_as::<_, (RoomId,)>(
                r#"
                SELECT room_id
                FROM rooms
                WHERE room_id = $1
                "#,
            )
            .bind(event.room_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if room.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "room ({}) was not found",
                    event.room_id
                )));
            }

            if has_conflict(&mut tx, event.room_id, &period, None).await? {
                return Err(AppError::ScheduleConflict(format!(
                    "room ({}) is not available in the selected schedule",
                    event.room_id
                )));
            }
        }

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
            INSERT INTO bookings
            (booking_id, room_id, client_id, start_time, end_time,
             status, purpose, attendees, total_price, notes, created_by)
            VALUES ($1, $2, $3, $4, $5, 'pending', $6, $7, $8, $9, $10)
            "#,
        )
        .bind(booking_id)
        .bind(event.room_id)
        .bind(event.client_id)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(&event.purpose)
        .bind(event.attendees)
        .bind(event.total_price)
        .bind(&event.notes)
        .bind(event.created_by)
        .execute(&mut *tx)
        .await
        .map_err(conflict_on_write)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }

        tx.commit().await.map_err(conflict_on_commit)?;

        Ok(booking_id)
    }

    async fn update(&self, event: UpdateBooking) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        set_transaction_serializable(&mut tx).await?;

        {
            let current = sqlx::query_as::<_, BookingRow>(&format!(
                "SELECT {BOOKING_COLUMNS} FROM bookings WHERE booking_id = $1"
            ))
            .bind(event.booking_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let Some(current) = current else {
                return Err(AppError::EntityNotFound(format!(
                    "booking ({}) was not found",
                    event.booking_id
                )));
            };

            if let Some(next) = event.status {
                if !current.status.can_transition_to(next) {
                    return Err(AppError::UnprocessableEntity(format!(
                        "booking status cannot change from {} to {}",
                        current.status, next
                    )));
                }
            }

            if event.touches_schedule() {
                // merge the patch over the stored values and re-check the
                // schedule, excluding this booking's own interval
                let room_id = event.room_id.unwrap_or(current.room_id);
                let period = Period::new(
                    event.start_time.unwrap_or(current.start_time),
                    event.end_time.unwrap_or(current.end_time),
                );
                if period.start >= period.end {
                    return Err(AppError::UnprocessableEntity(
                        "startTime must be before endTime".into(),
                    ));
                }
                if has_conflict(&mut tx, room_id, &period, Some(event.booking_id)).await? {
                    return Err(AppError::ScheduleConflict(format!(
                        "room ({room_id}) is not available in the selected schedule"
                    )));
                }
            }
        }

        let res = sqlx::query(
            r#"
            UPDATE bookings
            SET
                room_id = COALESCE($2, room_id),
                client_id = COALESCE($3, client_id),
                start_time = COALESCE($4, start_time),
                end_time = COALESCE($5, end_time),
                status = COALESCE($6, status),
                purpose = COALESCE($7, purpose),
                attendees = COALESCE($8, attendees),
                total_price = COALESCE($9, total_price),
                notes = COALESCE($10, notes),
                updated_at = CURRENT_TIMESTAMP
            WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(event.room_id)
        .bind(event.client_id)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.status)
        .bind(&event.purpose)
        .bind(event.attendees)
        .bind(event.total_price)
        .bind(&event.notes)
        .execute(&mut *tx)
        .await
        .map_err(conflict_on_write)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(conflict_on_commit)?;

        Ok(())
    }

    async fn cancel(&self, event: CancelBooking) -> AppResult<()> {
        // deliberately not guarded by the status machine: cancelling an already
        // cancelled booking just rewrites the same terminal state
        let res = sqlx::query(
            r#"
            UPDATE bookings
            SET
                status = 'cancelled',
                cancelled_at = CURRENT_TIMESTAMP,
                cancel_reason = $2,
                updated_at = CURRENT_TIMESTAMP
            WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(&event.reason)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "booking ({}) was not found",
                event.booking_id
            )));
        }

        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY start_time DESC"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE booking_id = $1"
        ))
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Booking::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE start_time >= $1 AND start_time <= $2
            ORDER BY start_time ASC
            "#
        ))
        .bind(start)
        .bind(end)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_room(&self, room_id: RoomId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE room_id = $1
            ORDER BY start_time DESC
            "#
        ))
        .bind(room_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_client(&self, client_id: ClientId) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE client_id = $1
            ORDER BY start_time DESC
            "#
        ))
        .bind(client_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Booking::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn check_availability(
        &self,
        room_id: RoomId,
        period: Period,
        exclude_booking_id: Option<BookingId>,
    ) -> AppResult<bool> {
        let candidates = fetch_booked_periods(self.db.inner_ref(), room_id).await?;
        Ok(!candidates
            .iter()
            .any(|row| row.blocks(&period, exclude_booking_id)))
    }
}

// SQL only narrows candidates to the room; cancelled-exclusion, self-exclusion
// and the interval test all run in process through BookedPeriodRow::blocks so
// the whole conflict policy is unit-testable in one place.
async fn fetch_booked_periods<'e, E>(executor: E, room_id: RoomId) -> AppResult<Vec<BookedPeriodRow>>
where
    E: sqlx::Executor<'e, Database = sqlx::Postgres>,
{
    sqlx::query_as::<_, BookedPeriodRow>(
        r#"
        SELECT booking_id, start_time, end_time, status
        FROM bookings
        WHERE room_id = $1
        "#,
    )
    .bind(room_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::SpecificOperationError)
}

async fn has_conflict(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    room_id: RoomId,
    period: &Period,
    exclude_booking_id: Option<BookingId>,
) -> AppResult<bool> {
    let conn: &mut PgConnection = tx;
    let candidates = fetch_booked_periods(conn, room_id).await?;
    Ok(candidates
        .iter()
        .any(|row| row.blocks(period, exclude_booking_id)))
}

async fn set_transaction_serializable(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
) -> AppResult<()> {
    sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
        .execute(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
    Ok(())
}

const SERIALIZATION_FAILURE_CODE: &str = "40001";

// Under SERIALIZABLE two racing writers can both pass the availability read;
// Postgres then aborts one of them with a serialization failure at write or
// commit time. That abort is the loser of a scheduling race, not an internal
// fault, so it surfaces as a schedule conflict.
fn is_serialization_failure(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::Database(db) if db.code().as_deref() == Some(SERIALIZATION_FAILURE_CODE)
    )
}

fn conflict_on_write(e: sqlx::Error) -> AppError {
    if is_serialization_failure(&e) {
        AppError::ScheduleConflict(
            "the requested schedule was taken by a concurrent booking".into(),
        )
    } else {
        AppError::SpecificOperationError(e)
    }
}

fn conflict_on_commit(e: sqlx::Error) -> AppError {
    if is_serialization_failure(&e) {
        AppError::ScheduleConflict(
            "the requested schedule was taken by a concurrent booking".into(),
        )
    } else {
        AppError::TransactionError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[derive(Debug)]
    struct StubDbError(&'static str);

    impl std::fmt::Display for StubDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sqlstate {}", self.0)
        }
    }

    impl std::error::Error for StubDbError {}

    impl sqlx::error::DatabaseError for StubDbError {
        fn message(&self) -> &str {
            "database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.0))
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }
    }

    fn db_error(code: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(StubDbError(code)))
    }

    #[test]
    fn serialization_failure_surfaces_as_schedule_conflict() {
        assert!(matches!(
            conflict_on_write(db_error("40001")),
            AppError::ScheduleConflict(_)
        ));
        assert!(matches!(
            conflict_on_commit(db_error("40001")),
            AppError::ScheduleConflict(_)
        ));
    }

    #[test]
    fn other_database_errors_stay_internal() {
        assert!(matches!(
            conflict_on_write(db_error("23505")),
            AppError::SpecificOperationError(_)
        ));
        assert!(matches!(
            conflict_on_commit(db_error("23505")),
            AppError::TransactionError(_)
        ));
        assert!(matches!(
            conflict_on_commit(sqlx::Error::RowNotFound),
            AppError::TransactionError(_)
        ));
    }
}
