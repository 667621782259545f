use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use crates::{
    domain::value_objects::registrations::CreateWaitlistEntryModel,
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::waitlist_entries::WaitlistEntryPostgres,
    },
};

use crate::auth::AuthAdmin;
use crate::axum_http::error_responses::error_reply;
use crate::usecases::waitlist::WaitlistUseCase;

type UseCase = WaitlistUseCase<WaitlistEntryPostgres>;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let usecase = WaitlistUseCase::new(Arc::new(WaitlistEntryPostgres::new(Arc::clone(
        &db_pool,
    ))));

    Router::new()
        .route("/", post(join_waitlist))
        .route("/", get(retrieve_data))
        .with_state(Arc::new(usecase))
}

pub async fn join_waitlist(
    State(usecase): State<Arc<UseCase>>,
    Json(model): Json<CreateWaitlistEntryModel>,
) -> Response {
    match usecase.join(model).await {
        Ok(_) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "message": "Successfully Joined Waitlist" })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub async fn retrieve_data(State(usecase): State<Arc<UseCase>>, _auth: AuthAdmin) -> Response {
    match usecase.list_recent().await {
        Ok(entries) => (StatusCode::OK, Json(entries)).into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}
