use sqlx::PgPool;

use crate::errors::AppError;

/// Returns the number of ratings removed.
pub async fn delete_ratings_by_user(user_id: i32, postgres: PgPool) -> Result<u64, AppError> {
    let deleted = sqlx::query("DELETE FROM ratings WHERE user_id = $1")
        .bind(user_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete ratings: {}", e)))?
        .rows_affected();

    tracing::info!("Deleted {} ratings of user {}", deleted, user_id);

    Ok(deleted)
}
