use sqlx::PgPool;

use crate::{errors::AppError, models::profile::Profile};

pub async fn create_profile(
    first_name: String,
    last_name: String,
    photo_url: Option<String>,
    postgres: PgPool,
) -> Result<Profile, AppError> {
    let profile = sqlx::query_as::<_, Profile>(
        "INSERT INTO profiles (first_name, last_name, photo_url)
        VALUES ($1, $2, $3)
        RETURNING id, first_name, last_name, photo_url, created_at",
    )
    .bind(&first_name)
    .bind(&last_name)
    .bind(&photo_url)
    .fetch_one(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to create profile: {}", e)))?;

    tracing::info!(
        "Created profile {} {} (ID: {})",
        profile.first_name,
        profile.last_name,
        profile.id
    );

    Ok(profile)
}
