use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::TypedHeader;
use chrono::{Duration, Utc};
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    errors::{ApiError, AppError},
    models::{
        User,
        user::{Claims, Role},
    },
    state::AppState,
};

const TOKEN_TTL_HOURS: i64 = 24;

pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    AppError::Unauthorized("Missing or invalid Authorization header".into())
                        .to_response()
                })?;

        AuthClaims::from_token(bearer.token(), state.jwt_secret())
    }
}

impl AuthClaims {
    pub fn from_token(token: &str, secret: &str) -> Result<Self, ApiError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            tracing::warn!("Rejected bearer token: {}", e);
            AppError::JwtError(e).to_response()
        })?;

        Ok(Self(token_data.claims))
    }

    pub fn require_any(&self, roles: &[Role]) -> Result<&Claims, ApiError> {
        if self.0.has_any_role(roles) {
            Ok(&self.0)
        } else {
            tracing::warn!(
                "User {} with role {} denied, needs one of {:?}",
                self.0.sub,
                self.0.role,
                roles
            );
            Err(AppError::Unauthorized("Insufficient role for this action".into()).to_response())
        }
    }
}

/// Bearer whose role is `admin`.
pub struct AdminClaims(pub Claims);

impl FromRequestParts<AppState> for AdminClaims {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthClaims::from_request_parts(parts, state).await?;
        auth.require_any(&[Role::Admin])?;
        Ok(Self(auth.0))
    }
}

pub fn generate_jwt(user: &User, secret: &str) -> Result<String, AppError> {
    let expiration = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        role: user.role,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| {
        tracing::error!("Failed to sign token for user {}: {}", user.id, e);
        AppError::InternalError
    })
}

// bcrypt is CPU bound, so both helpers run on the blocking pool.
pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await
        .map_err(|_| AppError::InternalError)?
        .map_err(AppError::HashError)
}

pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|_| AppError::InternalError)?
        .map_err(AppError::HashError)
}
