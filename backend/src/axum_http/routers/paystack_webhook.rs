use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use crates::{
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::{
            farewell_covers::FarewellCoverPostgres,
            healthy_elders_clubs::HealthyEldersClubPostgres,
            payment_events::PaymentEventPostgres,
        },
    },
    mailer::zeptomail_client::ZeptoMailClient,
    payments::paystack_client::PaystackClient,
};
use tracing::info;

use crate::axum_http::error_responses::error_reply;
use crate::usecases::paystack_webhook::{PaystackWebhookUseCase, WebhookOutcome};

type WebhookUseCase = PaystackWebhookUseCase<
    FarewellCoverPostgres,
    HealthyEldersClubPostgres,
    PaymentEventPostgres,
    PaystackClient,
    ZeptoMailClient,
>;

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    paystack_client: Arc<PaystackClient>,
    mailer: Arc<ZeptoMailClient>,
    subscription_template: String,
) -> Router {
    let usecase = PaystackWebhookUseCase::new(
        Arc::new(FarewellCoverPostgres::new(Arc::clone(&db_pool))),
        Arc::new(HealthyEldersClubPostgres::new(Arc::clone(&db_pool))),
        Arc::new(PaymentEventPostgres::new(Arc::clone(&db_pool))),
        paystack_client,
        mailer,
        subscription_template,
    );

    Router::new()
        .route("/", post(handle_paystack_webhook))
        .with_state(Arc::new(usecase))
}

/// Paystack delivers events here. The signature is computed over the raw
/// body, so the handler takes `Bytes` and parses after verification.
pub async fn handle_paystack_webhook(
    State(usecase): State<Arc<WebhookUseCase>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let signature = headers
        .get("x-paystack-signature")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    info!(
        body_len = body.len(),
        "paystack_webhook: delivery received"
    );

    match usecase.handle_event(&body, signature).await {
        Ok(WebhookOutcome::Processed) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Subscription verified and processed successfully"
            })),
        )
            .into_response(),
        Ok(WebhookOutcome::AlreadyProcessed) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "message": "Subscription already processed"
            })),
        )
            .into_response(),
        Ok(WebhookOutcome::Ignored) => (StatusCode::OK, "Event received").into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}
