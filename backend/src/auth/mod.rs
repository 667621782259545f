use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::config_loader;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub role: String,
}

#[derive(Debug)]
pub struct AuthError(anyhow::Error);

impl From<anyhow::Error> for AuthError {
    fn from(err: anyhow::Error) -> Self {
        AuthError(err)
    }
}

impl axum::response::IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::UNAUTHORIZED,
            format!("Unauthorized: {}", self.0),
        )
            .into_response()
    }
}

fn sign_token(user_id: Uuid, role: &str, secret: &str, ttl_seconds: i64) -> anyhow::Result<String> {
    let now = Utc::now();
    let exp = now
        .checked_add_signed(Duration::seconds(ttl_seconds))
        .ok_or_else(|| anyhow::anyhow!("Failed to compute token expiration"))?;

    let claims = TokenClaims {
        sub: user_id.to_string(),
        role: role.to_string(),
        iat: now.timestamp() as usize,
        exp: exp.timestamp() as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
}

fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, AuthError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<TokenClaims>(token, &decoding_key, &validation)
        .map_err(|e| anyhow::anyhow!("JWT validation failed: {}", e))?;

    Ok(token_data.claims)
}

/// Signs a fresh access + refresh pair. Refresh tokens use a separate secret
/// so the two are never interchangeable.
pub fn issue_token_pair(user_id: Uuid, role: &str) -> anyhow::Result<TokenPair> {
    let jwt = config_loader::get_jwt_secret()?;

    Ok(TokenPair {
        access_token: sign_token(user_id, role, &jwt.secret, jwt.expires_in_seconds)?,
        refresh_token: sign_token(
            user_id,
            role,
            &jwt.refresh_secret,
            jwt.refresh_expires_in_seconds,
        )?,
    })
}

pub fn validate_access_token(token: &str) -> Result<TokenClaims, AuthError> {
    let jwt = config_loader::get_jwt_secret()
        .map_err(|e| anyhow::anyhow!("Failed to load jwt config: {}", e))?;
    validate_token(token, &jwt.secret)
}

pub fn validate_refresh_token(token: &str) -> Result<TokenClaims, AuthError> {
    let jwt = config_loader::get_jwt_secret()
        .map_err(|e| anyhow::anyhow!("Failed to load jwt config: {}", e))?;
    validate_token(token, &jwt.refresh_secret)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or((
                StatusCode::UNAUTHORIZED,
                "Missing Authorization header".to_string(),
            ))?;

        let auth_str = auth_header.to_str().map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header".to_string(),
            )
        })?;

        if !auth_str.starts_with("Bearer ") {
            return Err((
                StatusCode::UNAUTHORIZED,
                "Invalid Authorization header format. It should be 'Bearer [token]'".to_string(),
            ));
        }

        let token = &auth_str[7..];

        let claims = validate_access_token(token)
            .map_err(|e| (StatusCode::UNAUTHORIZED, e.0.to_string()))?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                "Invalid user ID in token".to_string(),
            )
        })?;

        Ok(AuthUser {
            user_id,
            role: claims.role,
        })
    }
}

/// Admin-only variant of the extractor: rejects valid tokens whose role is
/// not `admin`.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if user.role != ROLE_ADMIN {
            return Err((
                StatusCode::FORBIDDEN,
                "Admin access required".to_string(),
            ));
        }

        Ok(AuthAdmin(user))
    }
}

#[cfg(test)]
mod tests;
