use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::models::rating_period::PeriodInfo;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Password hashing error: {0}")]
    HashError(#[from] bcrypt::BcryptError),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Rating submission is not available at this time.")]
    OutsideRatingPeriod(PeriodInfo),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Internal server error")]
    InternalError,

    #[error("Not found")]
    NotFound(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_info: Option<PeriodInfo>,
}

impl ErrorBody {
    fn message(msg: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: msg.into(),
            period_info: None,
        })
    }
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

impl AppError {
    pub fn to_response(&self) -> ApiError {
        match self {
            // Server-side details stay in the logs.
            AppError::DatabaseError(_)
            | AppError::HashError(_)
            | AppError::EnvError(_)
            | AppError::InternalError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody::message("Internal Server Error"),
            ),
            AppError::JwtError(_) => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::message("Invalid or expired token"),
            ),
            AppError::Deserialization(msg) => (StatusCode::BAD_REQUEST, ErrorBody::message(msg)),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ErrorBody::message(msg)),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorBody::message(msg)),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, ErrorBody::message(msg)),
            AppError::OutsideRatingPeriod(info) => (
                StatusCode::FORBIDDEN,
                Json(ErrorBody {
                    error: self.to_string(),
                    period_info: Some(info.clone()),
                }),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorBody::message(msg)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_response().into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Deserialization(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(format!("Invalid query string: {}", rejection.body_text()))
    }
}
