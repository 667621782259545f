use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use crates::infra::db::{
    postgres::postgres_connection::PgPoolSquad,
    repositories::{
        farewell_covers::FarewellCoverPostgres, healthy_elders_clubs::HealthyEldersClubPostgres,
    },
};

use crate::axum_http::error_responses::error_reply;
use crate::usecases::subscriptions::SubscriptionQueryUseCase;

type UseCase = SubscriptionQueryUseCase<FarewellCoverPostgres, HealthyEldersClubPostgres>;

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let usecase = SubscriptionQueryUseCase::new(
        Arc::new(FarewellCoverPostgres::new(Arc::clone(&db_pool))),
        Arc::new(HealthyEldersClubPostgres::new(Arc::clone(&db_pool))),
    );

    // `/records/...` keeps the by-id lookup from clashing with the product
    // routers nested under the same prefix.
    Router::new()
        .route("/user/:email", get(get_user_subscriptions))
        .route(
            "/records/:subscription_type/:id",
            get(get_subscription_by_id),
        )
        .with_state(Arc::new(usecase))
}

pub async fn get_user_subscriptions(
    State(usecase): State<Arc<UseCase>>,
    Path(email): Path<String>,
) -> Response {
    match usecase.get_user_subscriptions(&email).await {
        Ok(subscriptions) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "User subscriptions retrieved successfully",
                "subscriptions": subscriptions,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub async fn get_subscription_by_id(
    State(usecase): State<Arc<UseCase>>,
    Path((subscription_type, id)): Path<(String, String)>,
) -> Response {
    match usecase.get_subscription(&subscription_type, &id).await {
        Ok(record) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Subscription retrieved successfully",
                "subscription": record,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}
