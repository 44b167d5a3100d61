use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use crate::errors::AppError;

pub const SCORE_COUNT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: i32,
    pub profile_id: i32,
    pub user_id: i32,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub q4: f64,
    pub q5: f64,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    /// The four rated dimensions, in questionnaire order.
    pub fn dimensions(&self) -> [f64; 4] {
        [self.q1, self.q2, self.q3, self.q4]
    }
}

/// Positional q1..q5 scores of a single submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingScores(pub [f64; SCORE_COUNT]);

impl RatingScores {
    pub fn parse(values: &[Value]) -> Result<Self, AppError> {
        if values.len() != SCORE_COUNT {
            return Err(AppError::BadRequest(
                "Scores must be an array of 5 numbers (Q1–Q5 averages)".into(),
            ));
        }

        let mut scores = [0.0; SCORE_COUNT];
        for (slot, value) in scores.iter_mut().zip(values) {
            *slot = value
                .as_f64()
                .filter(|v| v.is_finite())
                .ok_or_else(|| AppError::BadRequest("All scores must be valid numbers".into()))?;
        }

        Ok(Self(scores))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRatings {
    pub profile_id: i32,
    pub ratings: Vec<Rating>,
}
