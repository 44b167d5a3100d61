use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use crate::{
    auth::{AuthClaims, generate_jwt, hash_password, verify_password},
    db::user::{create_user, get_user_by_email},
    errors::{ApiError, AppError},
    models::user::Role,
    state::AppState,
};

#[derive(Deserialize)]
pub struct CredentialsPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialsPayload {
    fn into_parts(self) -> Result<(String, String), AppError> {
        let email = self.email.map(|e| e.trim().to_lowercase()).unwrap_or_default();
        let password = self.password.unwrap_or_default();

        if email.is_empty() || password.is_empty() {
            return Err(AppError::BadRequest(
                "Email and password are required.".into(),
            ));
        }

        Ok((email, password))
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub message: String,
    pub user_id: i32,
    pub role: Role,
    pub token: String,
}

#[derive(Serialize)]
pub struct AccessResponse {
    pub success: bool,
}

pub async fn sign_up_handler(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CredentialsPayload>, AppError>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let (email, password) = payload.into_parts().map_err(|e| e.to_response())?;

    let password_hash = hash_password(password).await.map_err(|e| {
        tracing::error!("Error hashing password: {}", e);
        e.to_response()
    })?;

    let user = create_user(email, password_hash, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error creating user: {}", e);
            e.to_response()
        })?;

    tracing::info!("User signed up: {}", user.email);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created!".into(),
        }),
    ))
}

pub async fn sign_in_handler(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<CredentialsPayload>, AppError>,
) -> Result<Json<SignInResponse>, ApiError> {
    let (email, password) = payload.into_parts().map_err(|e| e.to_response())?;

    let user = get_user_by_email(&email, state.postgres.clone())
        .await
        .map_err(|e| {
            tracing::warn!("Sign in failed for {}: {}", email, e);
            e.to_response()
        })?;

    let valid = verify_password(password, user.password_hash.clone())
        .await
        .map_err(|e| {
            tracing::error!("Error verifying password: {}", e);
            e.to_response()
        })?;

    if !valid {
        tracing::warn!("Invalid credentials for {}", email);
        return Err(AppError::Unauthorized("Invalid credentials".into()).to_response());
    }

    let token = generate_jwt(&user, state.jwt_secret()).map_err(|e| e.to_response())?;

    tracing::info!("User {} signed in", user.id);
    Ok(Json(SignInResponse {
        message: "Login successful!".into(),
        user_id: user.id,
        role: user.role,
        token,
    }))
}

pub async fn admin_access_handler(AuthClaims(claims): AuthClaims) -> Json<AccessResponse> {
    Json(AccessResponse {
        success: claims.has_any_role(&[Role::Admin]),
    })
}

pub async fn feedback_access_handler(AuthClaims(claims): AuthClaims) -> Json<AccessResponse> {
    Json(AccessResponse {
        success: claims.has_any_role(&[Role::Feedback, Role::Admin]),
    })
}
