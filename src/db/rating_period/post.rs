use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{errors::AppError, models::rating_period::RatingPeriod};

/// Inserts a new active period and deactivates every other one.
pub async fn create_rating_period(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    postgres: PgPool,
) -> Result<RatingPeriod, AppError> {
    if start_date >= end_date {
        return Err(AppError::BadRequest(
            "End date must be after start date.".into(),
        ));
    }

    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let deactivated = sqlx::query(
        "UPDATE rating_periods
        SET is_active = FALSE, updated_at = NOW()
        WHERE is_active",
    )
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to deactivate periods: {}", e)))?
    .rows_affected();

    let period = sqlx::query_as::<_, RatingPeriod>(
        "INSERT INTO rating_periods (start_date, end_date, is_active)
        VALUES ($1, $2, TRUE)
        RETURNING id, start_date, end_date, is_active, created_at, updated_at",
    )
    .bind(start_date)
    .bind(end_date)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create rating period: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit rating period: {}", e)))?;

    tracing::info!(
        "Created rating period {} ({} to {}), deactivated {} previous",
        period.id,
        period.start_date,
        period.end_date,
        deactivated
    );

    Ok(period)
}
