use sqlx::PgPool;

use crate::{errors::AppError, models::User};

pub async fn get_user_by_email(email: &str, postgres: PgPool) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, email, password_hash, role, created_at
        FROM users
        WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to query user: {}", e)))?;

    user.ok_or_else(|| AppError::NotFound("User not found".into()))
}

pub async fn count_users(postgres: PgPool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&postgres)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to count users: {}", e)))
}
