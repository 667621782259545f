use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use crates::payments::paystack_client::PaystackClient;

use crate::auth::AuthAdmin;
use crate::axum_http::error_responses::error_reply;
use crate::usecases::transactions::TransactionsUseCase;

type UseCase = TransactionsUseCase<PaystackClient>;

pub fn routes(paystack_client: Arc<PaystackClient>) -> Router {
    let usecase = TransactionsUseCase::new(paystack_client);

    Router::new()
        .route("/", get(fetch_total_cash_inflow))
        .with_state(Arc::new(usecase))
}

pub async fn fetch_total_cash_inflow(
    State(usecase): State<Arc<UseCase>>,
    _auth: AuthAdmin,
) -> Response {
    match usecase.fetch_total_cash_inflow().await {
        Ok(inflow) => (StatusCode::OK, Json(inflow)).into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}
