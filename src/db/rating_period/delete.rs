use sqlx::PgPool;

use crate::errors::AppError;

pub async fn delete_rating_period(period_id: i32, postgres: PgPool) -> Result<(), AppError> {
    let deleted = sqlx::query("DELETE FROM rating_periods WHERE id = $1")
        .bind(period_id)
        .execute(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete rating period: {}", e)))?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::NotFound("Rating period not found.".into()));
    }

    tracing::info!("Deleted rating period {}", period_id);

    Ok(())
}
