use sqlx::PgPool;

use crate::{errors::AppError, models::rating_period::RatingPeriod};

/// Most recently updated active period, if any.
pub async fn get_active_period(postgres: PgPool) -> Result<Option<RatingPeriod>, AppError> {
    sqlx::query_as::<_, RatingPeriod>(
        "SELECT id, start_date, end_date, is_active, created_at, updated_at
        FROM rating_periods
        WHERE is_active
        ORDER BY updated_at DESC
        LIMIT 1",
    )
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating period: {}", e)))
}
