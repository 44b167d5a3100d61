use sqlx::PgPool;

use crate::{errors::AppError, models::rating::Rating};

pub async fn get_all_ratings(postgres: PgPool) -> Result<Vec<Rating>, AppError> {
    sqlx::query_as::<_, Rating>(
        "SELECT id, profile_id, user_id, q1, q2, q3, q4, q5, created_at
        FROM ratings
        ORDER BY created_at DESC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch ratings: {}", e)))
}

pub async fn get_ratings_for_profile(
    profile_id: i32,
    postgres: PgPool,
) -> Result<Vec<Rating>, AppError> {
    sqlx::query_as::<_, Rating>(
        "SELECT id, profile_id, user_id, q1, q2, q3, q4, q5, created_at
        FROM ratings
        WHERE profile_id = $1
        ORDER BY created_at DESC",
    )
    .bind(profile_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch ratings: {}", e)))
}

pub async fn get_ratings_by_user(user_id: i32, postgres: PgPool) -> Result<Vec<Rating>, AppError> {
    sqlx::query_as::<_, Rating>(
        "SELECT id, profile_id, user_id, q1, q2, q3, q4, q5, created_at
        FROM ratings
        WHERE user_id = $1
        ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch user ratings: {}", e)))
}

pub async fn count_ratings(postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ratings")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count ratings: {}", e)))
}

/// Number of distinct users with at least one rating.
pub async fn count_raters(postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(DISTINCT user_id) FROM ratings")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count raters: {}", e)))
}
