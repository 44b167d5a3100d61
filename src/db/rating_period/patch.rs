use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::rating_period::{PeriodChanges, RatingPeriod},
};

pub async fn update_rating_period(
    period_id: i32,
    changes: PeriodChanges,
    postgres: PgPool,
) -> Result<RatingPeriod, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let existing = sqlx::query_as::<_, RatingPeriod>(
        "SELECT id, start_date, end_date, is_active, created_at, updated_at
        FROM rating_periods
        WHERE id = $1
        FOR UPDATE",
    )
    .bind(period_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query rating period: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Rating period not found.".into()))?;

    changes.validate_against(&existing)?;

    if changes.is_active == Some(true) {
        sqlx::query(
            "UPDATE rating_periods
            SET is_active = FALSE, updated_at = NOW()
            WHERE is_active AND id <> $1",
        )
        .bind(period_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to deactivate periods: {}", e)))?;
    }

    let period = sqlx::query_as::<_, RatingPeriod>(
        "UPDATE rating_periods
        SET start_date = COALESCE($2, start_date),
            end_date = COALESCE($3, end_date),
            is_active = COALESCE($4, is_active),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, start_date, end_date, is_active, created_at, updated_at",
    )
    .bind(period_id)
    .bind(changes.start_date)
    .bind(changes.end_date)
    .bind(changes.is_active)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update rating period: {}", e)))?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit rating period: {}", e)))?;

    tracing::info!("Updated rating period {}", period.id);

    Ok(period)
}
