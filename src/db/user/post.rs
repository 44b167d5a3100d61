use sqlx::PgPool;

use crate::{db::is_unique_violation, errors::AppError, models::User};

pub async fn create_user(
    email: String,
    password_hash: String,
    postgres: PgPool,
) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password_hash)
        VALUES ($1, $2)
        RETURNING id, email, password_hash, role, created_at",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(&postgres)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::BadRequest("User already exists".into())
        } else {
            AppError::DatabaseError(format!("Failed to create user: {}", e))
        }
    })?;

    tracing::info!("Created user {} (ID: {})", user.email, user.id);

    Ok(user)
}
