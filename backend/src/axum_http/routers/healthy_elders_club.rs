use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use crates::{
    domain::value_objects::healthy_elders::CreateHealthyEldersModel,
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::healthy_elders_clubs::HealthyEldersClubPostgres,
    },
    payments::paystack_client::PaystackClient,
};

use crate::auth::AuthAdmin;
use crate::axum_http::error_responses::error_reply;
use crate::usecases::healthy_elders_club::HealthyEldersClubUseCase;

type UseCase = HealthyEldersClubUseCase<HealthyEldersClubPostgres, PaystackClient>;

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    paystack_client: Arc<PaystackClient>,
    plan_code: String,
) -> Router {
    let usecase = HealthyEldersClubUseCase::new(
        Arc::new(HealthyEldersClubPostgres::new(Arc::clone(&db_pool))),
        paystack_client,
        plan_code,
    );

    Router::new()
        .route("/", post(create_healthy_elders_subscription))
        .route("/", get(retrieve_data))
        .with_state(Arc::new(usecase))
}

pub async fn create_healthy_elders_subscription(
    State(usecase): State<Arc<UseCase>>,
    Json(model): Json<CreateHealthyEldersModel>,
) -> Response {
    match usecase.create(model).await {
        Ok(checkout) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "Healthy Elders Club Subscription. Proceed To Make Payment To Activate Your Subscription.",
                "subscriptionId": checkout.subscription_id,
                "paystackLink": checkout.paystack_link,
                "paystackCustomerCreated": checkout.paystack_customer_created,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub async fn retrieve_data(State(usecase): State<Arc<UseCase>>, _auth: AuthAdmin) -> Response {
    match usecase.list_recent().await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}
