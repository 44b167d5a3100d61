use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::{
    auth::AdminClaims,
    db::rating_period::{
        create_rating_period, delete_rating_period, get_active_period, update_rating_period,
    },
    errors::{ApiError, AppError},
    models::rating_period::{PeriodChanges, RatingPeriod, parse_new_period},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePeriodPayload {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePeriodPayload {
    pub id: Option<i32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Deserialize)]
pub struct DeletePeriodPayload {
    pub id: Option<i32>,
}

#[derive(Serialize)]
pub struct ActivePeriodResponse {
    pub period: Option<RatingPeriod>,
}

#[derive(Serialize)]
pub struct PeriodResponse {
    pub success: bool,
    pub period: RatingPeriod,
}

#[derive(Serialize)]
pub struct DeletePeriodResponse {
    pub success: bool,
}

fn require_id(id: Option<i32>) -> Result<i32, ApiError> {
    id.ok_or_else(|| AppError::BadRequest("Period ID is required.".into()).to_response())
}

pub async fn get_period_handler(
    State(state): State<AppState>,
) -> Result<Json<ActivePeriodResponse>, ApiError> {
    let period = get_active_period(state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching rating period: {}", e);
            e.to_response()
        })?;

    Ok(Json(ActivePeriodResponse { period }))
}

pub async fn create_period_handler(
    State(state): State<AppState>,
    _admin: AdminClaims,
    WithRejection(Json(payload), _): WithRejection<Json<CreatePeriodPayload>, AppError>,
) -> Result<Json<PeriodResponse>, ApiError> {
    let (start_date, end_date) =
        parse_new_period(payload.start_date.as_deref(), payload.end_date.as_deref())
            .map_err(|e| e.to_response())?;

    let period = create_rating_period(start_date, end_date, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error creating rating period: {}", e);
            e.to_response()
        })?;

    Ok(Json(PeriodResponse {
        success: true,
        period,
    }))
}

pub async fn update_period_handler(
    State(state): State<AppState>,
    _admin: AdminClaims,
    WithRejection(Json(payload), _): WithRejection<Json<UpdatePeriodPayload>, AppError>,
) -> Result<Json<PeriodResponse>, ApiError> {
    let period_id = require_id(payload.id)?;

    let changes = PeriodChanges::parse(
        payload.start_date.as_deref(),
        payload.end_date.as_deref(),
        payload.is_active,
    )
    .map_err(|e| e.to_response())?;

    let period = update_rating_period(period_id, changes, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error updating rating period {}: {}", period_id, e);
            e.to_response()
        })?;

    Ok(Json(PeriodResponse {
        success: true,
        period,
    }))
}

pub async fn delete_period_handler(
    State(state): State<AppState>,
    _admin: AdminClaims,
    WithRejection(Json(payload), _): WithRejection<Json<DeletePeriodPayload>, AppError>,
) -> Result<Json<DeletePeriodResponse>, ApiError> {
    let period_id = require_id(payload.id)?;

    delete_rating_period(period_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error deleting rating period {}: {}", period_id, e);
            e.to_response()
        })?;

    Ok(Json(DeletePeriodResponse { success: true }))
}
