use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    auth::AuthClaims,
    db::{
        profile::get_profile,
        rating::{create_rating, get_ratings_for_profile},
    },
    errors::{ApiError, AppError},
    models::rating::{ProfileRatings, Rating, RatingScores},
    state::AppState,
    survey::questionnaire::scores_from_answers,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingPayload {
    pub scores: Option<Vec<Value>>,
    pub answers: Option<Vec<Value>>,
    pub user_id: Option<i32>,
}

impl SubmitRatingPayload {
    /// Either five precomputed scores or the sixteen raw answers.
    fn scores(&self) -> Result<RatingScores, AppError> {
        match (&self.scores, &self.answers) {
            (Some(scores), _) => RatingScores::parse(scores),
            (None, Some(answers)) => {
                let answers = answers
                    .iter()
                    .map(|a| a.as_f64())
                    .collect::<Option<Vec<f64>>>()
                    .ok_or_else(|| {
                        AppError::BadRequest("All answers must be valid numbers".into())
                    })?;
                scores_from_answers(&answers).map(RatingScores)
            }
            (None, None) => Err(AppError::BadRequest(
                "Scores must be an array of 5 numbers (Q1–Q5 averages)".into(),
            )),
        }
    }
}

#[derive(Serialize)]
pub struct SubmitRatingResponse {
    pub success: bool,
    pub rating: Rating,
}

pub async fn get_ratings_handler(
    State(state): State<AppState>,
    _auth: AuthClaims,
    WithRejection(Path(profile_id), _): WithRejection<Path<i32>, AppError>,
) -> Result<Json<ProfileRatings>, ApiError> {
    get_profile(profile_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching profile {}: {}", profile_id, e);
            e.to_response()
        })?;

    let ratings = get_ratings_for_profile(profile_id, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error fetching ratings of profile {}: {}", profile_id, e);
            e.to_response()
        })?;

    Ok(Json(ProfileRatings {
        profile_id,
        ratings,
    }))
}

pub async fn submit_rating_handler(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    WithRejection(Path(profile_id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(payload), _): WithRejection<Json<SubmitRatingPayload>, AppError>,
) -> Result<Json<SubmitRatingResponse>, ApiError> {
    let Some(user_id) = payload.user_id else {
        return Err(
            AppError::BadRequest("userId is required to submit a rating.".into()).to_response(),
        );
    };

    let scores = payload.scores().map_err(|e| e.to_response())?;

    if claims.user_id() != Some(user_id) {
        tracing::warn!(
            "User {} tried to submit a rating as user {}",
            claims.sub,
            user_id
        );
        return Err(AppError::Unauthorized(
            "userId does not match the authenticated user.".into(),
        )
        .to_response());
    }

    let rating = create_rating(profile_id, user_id, scores, state.postgres.clone())
        .await
        .map_err(|e| {
            match e {
                AppError::OutsideRatingPeriod(_) | AppError::Forbidden(_) => {
                    tracing::info!("Rating for profile {} rejected: {}", profile_id, e)
                }
                _ => tracing::error!("Error submitting rating for profile {}: {}", profile_id, e),
            }
            e.to_response()
        })?;

    Ok(Json(SubmitRatingResponse {
        success: true,
        rating,
    }))
}
