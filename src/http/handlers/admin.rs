use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::{
    auth::AdminClaims,
    db::{
        rating::{count_raters, count_ratings, delete_ratings_by_user, get_ratings_by_user},
        user::{count_users, get_user_by_email, update_user_role},
    },
    errors::{ApiError, AppError},
    models::{
        rating::Rating,
        user::{Role, UserRole},
    },
    state::AppState,
};

#[derive(Deserialize)]
pub struct UpdateRolePayload {
    pub email: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct EmailPayload {
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateRoleResponse {
    pub success: bool,
    pub user: UserRole,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub user_count: i64,
    pub rating_count: i64,
    pub rater_count: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRatingsResponse {
    pub has_ratings: bool,
    pub ratings: Vec<Rating>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRatingsResponse {
    pub deleted_count: u64,
}

fn require_email(email: Option<String>) -> Result<String, ApiError> {
    email
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::BadRequest("Email is required".into()).to_response())
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    AdminClaims(claims): AdminClaims,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateRolePayload>, AppError>,
) -> Result<Json<UpdateRoleResponse>, ApiError> {
    let (Some(email), Some(role)) = (
        payload.email.map(|e| e.trim().to_lowercase()).filter(|e| !e.is_empty()),
        payload.role.filter(|r| !r.is_empty()),
    ) else {
        return Err(AppError::BadRequest("Email and role are required.".into()).to_response());
    };

    let role: Role = role
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid role.".into()).to_response())?;

    let user = update_user_role(&email, role, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error updating role of {}: {}", email, e);
            e.to_response()
        })?;

    tracing::info!("Admin {} set role of {} to {}", claims.email, user.email, role);
    Ok(Json(UpdateRoleResponse {
        success: true,
        user: user.into(),
    }))
}

pub async fn stats_handler(
    State(state): State<AppState>,
    _admin: AdminClaims,
) -> Result<Json<StatsResponse>, ApiError> {
    let stats = async {
        Ok::<_, AppError>(StatsResponse {
            user_count: count_users(state.postgres.clone()).await?,
            rating_count: count_ratings(state.postgres.clone()).await?,
            rater_count: count_raters(state.postgres.clone()).await?,
        })
    }
    .await
    .map_err(|e| {
        tracing::error!("Error fetching stats: {}", e);
        e.to_response()
    })?;

    Ok(Json(stats))
}

pub async fn get_user_ratings_handler(
    State(state): State<AppState>,
    _admin: AdminClaims,
    WithRejection(Query(query), _): WithRejection<Query<EmailPayload>, AppError>,
) -> Result<Json<UserRatingsResponse>, ApiError> {
    let email = require_email(query.email)?;

    let user = get_user_by_email(&email, state.postgres.clone())
        .await
        .map_err(|e| e.to_response())?;

    let ratings = get_ratings_by_user(user.id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching ratings of {}: {}", email, e);
            e.to_response()
        })?;

    Ok(Json(UserRatingsResponse {
        has_ratings: !ratings.is_empty(),
        ratings,
    }))
}

pub async fn delete_user_ratings_handler(
    State(state): State<AppState>,
    AdminClaims(claims): AdminClaims,
    WithRejection(Json(payload), _): WithRejection<Json<EmailPayload>, AppError>,
) -> Result<Json<DeleteRatingsResponse>, ApiError> {
    let email = require_email(payload.email)?;

    let user = get_user_by_email(&email, state.postgres.clone())
        .await
        .map_err(|e| e.to_response())?;

    let deleted_count = delete_ratings_by_user(user.id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting ratings of {}: {}", email, e);
            e.to_response()
        })?;

    tracing::info!(
        "Admin {} deleted {} ratings of {}",
        claims.email,
        deleted_count,
        email
    );
    Ok(Json(DeleteRatingsResponse { deleted_count }))
}
