use chrono::Utc;
use sqlx::PgPool;

use crate::{
    db::is_foreign_key_violation,
    errors::AppError,
    models::{
        rating::{Rating, RatingScores},
        rating_period::RatingPeriod,
    },
    survey::check_submission_window,
};

/// Checks the profile and the rating window, then inserts, all in one
/// transaction. The active period row is share-locked so a concurrent period
/// update waits for this submission to finish.
pub async fn create_rating(
    profile_id: i32,
    user_id: i32,
    scores: RatingScores,
    postgres: PgPool,
) -> Result<Rating, AppError> {
    let mut tx = postgres
        .begin()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to begin transaction: {}", e)))?;

    let profile_exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM profiles WHERE id = $1)")
            .bind(profile_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to query profile: {}", e)))?;

    if !profile_exists {
        return Err(AppError::NotFound("Profile not found".into()));
    }

    let active_period = sqlx::query_as::<_, RatingPeriod>(
        "SELECT id, start_date, end_date, is_active, created_at, updated_at
        FROM rating_periods
        WHERE is_active
        ORDER BY updated_at DESC
        LIMIT 1
        FOR SHARE",
    )
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch rating period: {}", e)))?;

    check_submission_window(active_period.as_ref(), Utc::now())?;

    let [q1, q2, q3, q4, q5] = scores.0;
    let rating = sqlx::query_as::<_, Rating>(
        "INSERT INTO ratings (profile_id, user_id, q1, q2, q3, q4, q5)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, profile_id, user_id, q1, q2, q3, q4, q5, created_at",
    )
    .bind(profile_id)
    .bind(user_id)
    .bind(q1)
    .bind(q2)
    .bind(q3)
    .bind(q4)
    .bind(q5)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| {
        if is_foreign_key_violation(&e) {
            AppError::BadRequest("Profile not found or invalid profile ID".into())
        } else {
            AppError::DatabaseError(format!("Failed to create rating: {}", e))
        }
    })?;

    tx.commit()
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to commit rating: {}", e)))?;

    tracing::info!(
        "User {} rated profile {} (rating ID: {})",
        user_id,
        profile_id,
        rating.id
    );

    Ok(rating)
}
