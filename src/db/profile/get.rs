use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    db::rating::get::get_all_ratings,
    errors::AppError,
    models::profile::Profile,
    survey::ProfileWithRatings,
};

pub async fn get_all_profiles(postgres: PgPool) -> Result<Vec<Profile>, AppError> {
    sqlx::query_as::<_, Profile>(
        "SELECT id, first_name, last_name, photo_url, created_at
        FROM profiles
        ORDER BY created_at DESC",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch profiles: {}", e)))
}

pub async fn get_profile(profile_id: i32, postgres: PgPool) -> Result<Profile, AppError> {
    sqlx::query_as::<_, Profile>(
        "SELECT id, first_name, last_name, photo_url, created_at
        FROM profiles
        WHERE id = $1",
    )
    .bind(profile_id)
    .fetch_optional(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch profile: {}", e)))?
    .ok_or_else(|| AppError::NotFound("Profile not found".into()))
}

/// Every profile in id order, each with its ratings newest first.
pub async fn get_profiles_with_ratings(
    postgres: PgPool,
) -> Result<Vec<ProfileWithRatings>, AppError> {
    let profiles = sqlx::query_as::<_, Profile>(
        "SELECT id, first_name, last_name, photo_url, created_at
        FROM profiles
        ORDER BY id",
    )
    .fetch_all(&postgres)
    .await
    .map_err(|e| AppError::DatabaseError(format!("Failed to fetch profiles: {}", e)))?;

    let mut ratings_by_profile = HashMap::new();
    for rating in get_all_ratings(postgres).await? {
        ratings_by_profile
            .entry(rating.profile_id)
            .or_insert_with(Vec::new)
            .push(rating);
    }

    Ok(profiles
        .into_iter()
        .map(|profile| ProfileWithRatings {
            ratings: ratings_by_profile.remove(&profile.id).unwrap_or_default(),
            profile,
        })
        .collect())
}
