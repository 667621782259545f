use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{patch, post},
};
use crates::{
    domain::value_objects::registrations::{LoginModel, RegisterSuperAdminModel, RegisterUserModel},
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{super_admins::SuperAdminPostgres, users::UserPostgres},
    },
    mailer::zeptomail_client::ZeptoMailClient,
};
use uuid::Uuid;

use crate::auth::AuthAdmin;
use crate::axum_http::error_responses::error_reply;
use crate::config::config_model::ZeptoMail;
use crate::usecases::auth::AuthUseCase;

type UseCase = AuthUseCase<UserPostgres, SuperAdminPostgres, ZeptoMailClient>;

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    mailer: Arc<ZeptoMailClient>,
    mail_config: ZeptoMail,
) -> Router {
    let usecase = AuthUseCase::new(
        Arc::new(UserPostgres::new(Arc::clone(&db_pool))),
        Arc::new(SuperAdminPostgres::new(Arc::clone(&db_pool))),
        mailer,
        mail_config,
    );

    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
        .route("/refresh", post(refresh_tokens))
        .route("/users/:id/verify", patch(verify_user))
        .route("/admin/register", post(register_super_admin))
        .route("/admin/login", post(login_super_admin))
        .with_state(Arc::new(usecase))
}

pub async fn register_user(
    State(usecase): State<Arc<UseCase>>,
    Json(model): Json<RegisterUserModel>,
) -> Response {
    match usecase.register_user(model).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "User registered successfully",
                "user": user,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub async fn login_user(
    State(usecase): State<Arc<UseCase>>,
    Json(model): Json<LoginModel>,
) -> Response {
    match usecase.login_user(model).await {
        Ok(user) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Logged in successfully",
                "user": user,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub async fn register_super_admin(
    State(usecase): State<Arc<UseCase>>,
    Json(model): Json<RegisterSuperAdminModel>,
) -> Response {
    match usecase.register_super_admin(model).await {
        Ok(tokens) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "Account Created Successfully",
                "tokens": tokens,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub async fn login_super_admin(
    State(usecase): State<Arc<UseCase>>,
    Json(model): Json<LoginModel>,
) -> Response {
    match usecase.login_super_admin(model).await {
        Ok((admin, tokens)) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Logged in successfully!",
                "name": format!("{} {}", admin.first_name, admin.last_name),
                "tokens": tokens,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

/// Rotation endpoint: the refresh token travels in the Authorization header
/// the same way access tokens do.
pub async fn refresh_tokens(State(usecase): State<Arc<UseCase>>, headers: HeaderMap) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return error_reply(
            StatusCode::BAD_REQUEST,
            "Invalid Authorization header format. It should be 'Bearer [token]'".to_string(),
        );
    };

    match usecase.refresh_tokens(token).await {
        Ok(tokens) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Access token refreshed successfully",
                "tokens": tokens,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub async fn verify_user(
    State(usecase): State<Arc<UseCase>>,
    Path(user_id): Path<Uuid>,
    _auth: AuthAdmin,
) -> Response {
    match usecase.verify_user(user_id).await {
        Ok(user) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "User verified successfully",
                "user": user,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
