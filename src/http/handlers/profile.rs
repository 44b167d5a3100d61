use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::{
    auth::AuthClaims,
    db::profile::{create_profile, get_all_profiles, get_profile},
    errors::{ApiError, AppError},
    models::{profile::Profile, user::Role},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfilePayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
}

pub async fn get_profiles_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    let profiles = get_all_profiles(state.postgres.clone()).await.map_err(|e| {
        tracing::error!("Error fetching profiles: {}", e);
        e.to_response()
    })?;

    Ok(Json(profiles))
}

pub async fn get_profile_handler(
    State(state): State<AppState>,
    WithRejection(Path(profile_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<Profile>, ApiError> {
    let profile = get_profile(profile_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching profile {}: {}", profile_id, e);
            e.to_response()
        })?;

    Ok(Json(profile))
}

pub async fn create_profile_handler(
    State(state): State<AppState>,
    auth: AuthClaims,
    WithRejection(Json(payload), _): WithRejection<Json<CreateProfilePayload>, AppError>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    auth.require_any(&[Role::Feedback, Role::Admin])?;

    let first_name = payload.first_name.unwrap_or_default().trim().to_string();
    let last_name = payload.last_name.unwrap_or_default().trim().to_string();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(
            AppError::BadRequest("First name and last name are required.".into()).to_response(),
        );
    }

    let photo_url = payload.photo_url.filter(|url| !url.trim().is_empty());

    let profile = create_profile(first_name, last_name, photo_url, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error creating profile: {}", e);
            e.to_response()
        })?;

    Ok((StatusCode::CREATED, Json(profile)))
}
