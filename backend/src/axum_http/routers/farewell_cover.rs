use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use crates::{
    domain::value_objects::farewell_cover::CreateFarewellCoverModel,
    infra::db::{
        postgres::postgres_connection::PgPoolSquad,
        repositories::farewell_covers::FarewellCoverPostgres,
    },
    media::cloudinary_client::CloudinaryClient,
    payments::paystack_client::PaystackClient,
};

use crate::auth::AuthAdmin;
use crate::axum_http::{error_responses::error_reply, forms::RegistrationForm};
use crate::config::config_model::FarewellPlanCodes;
use crate::usecases::farewell_cover::FarewellCoverUseCase;

type UseCase = FarewellCoverUseCase<FarewellCoverPostgres, PaystackClient, CloudinaryClient>;

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    paystack_client: Arc<PaystackClient>,
    media_storage: Arc<CloudinaryClient>,
    plan_codes: FarewellPlanCodes,
) -> Router {
    let usecase = FarewellCoverUseCase::new(
        Arc::new(FarewellCoverPostgres::new(Arc::clone(&db_pool))),
        paystack_client,
        media_storage,
        plan_codes,
    );

    Router::new()
        .route("/", post(create_farewell_cover_plan))
        .route("/", get(retrieve_data))
        .with_state(Arc::new(usecase))
}

pub async fn create_farewell_cover_plan(
    State(usecase): State<Arc<UseCase>>,
    multipart: Multipart,
) -> Response {
    let mut form = match RegistrationForm::collect(multipart).await {
        Ok(form) => form,
        Err((status, message)) => return error_reply(status, message),
    };

    let model: CreateFarewellCoverModel = match form.parse_fields() {
        Ok(model) => model,
        Err((status, message)) => return error_reply(status, message),
    };

    let photo = match form.take_file("photo") {
        Ok(photo) => photo,
        Err((status, message)) => return error_reply(status, message),
    };

    match usecase.create(model, photo.bytes, photo.content_type).await {
        Ok(checkout) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "Farewell Cover Plan Registered. Proceed to make payment.",
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
