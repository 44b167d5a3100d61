use sqlx::PgPool;

use crate::{
    errors::AppError,
    models::{User, user::Role},
};

pub async fn update_user_role(email: &str, role: Role, postgres: PgPool) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        "UPDATE users
        SET role = $1
        WHERE email = $2
        RETURNING id, email, password_hash, role, created_at",
    )
    .bind(role.as_str())
    .bind(email)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to update user role: {}", e)))?
    .ok_or_else(|| AppError::NotFound("User not found.".into()))?;

    tracing::info!("Role of {} set to {}", user.email, user.role);

    Ok(user)
}
