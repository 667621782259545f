use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use crates::{
    domain::value_objects::{
        enums::caregiver_roles::CaregiverRole, registrations::CreateCaregiverModel,
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::caregivers::CaregiverPostgres,
    },
    mailer::zeptomail_client::ZeptoMailClient,
    media::cloudinary_client::CloudinaryClient,
};

use crate::auth::AuthAdmin;
use crate::axum_http::{error_responses::error_reply, forms::RegistrationForm};
use crate::usecases::caregiver_registration::{
    CaregiverRegistrationUseCase, CaregiverUploads,
};

type UseCase =
    CaregiverRegistrationUseCase<CaregiverPostgres, CloudinaryClient, ZeptoMailClient>;

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    media_storage: Arc<CloudinaryClient>,
    mailer: Arc<ZeptoMailClient>,
    welcome_template: String,
) -> Router {
    let usecase = CaregiverRegistrationUseCase::new(
        Arc::new(CaregiverPostgres::new(Arc::clone(&db_pool))),
        media_storage,
        mailer,
        welcome_template,
    );

    Router::new()
        .route("/:role", post(register_caregiver).get(retrieve_data))
        .with_state(Arc::new(usecase))
}

fn parse_role(role: &str) -> Result<CaregiverRole, Response> {
    CaregiverRole::from_str(role).ok_or_else(|| {
        error_reply(
            StatusCode::NOT_FOUND,
            format!("Unknown caregiver type: {}", role),
        )
    })
}

pub async fn register_caregiver(
    State(usecase): State<Arc<UseCase>>,
    Path(role): Path<String>,
    multipart: Multipart,
) -> Response {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    let mut form = match RegistrationForm::collect(multipart).await {
        Ok(form) => form,
        Err((status, message)) => return error_reply(status, message),
    };

    let model: CreateCaregiverModel = match form.parse_fields() {
        Ok(model) => model,
        Err((status, message)) => return error_reply(status, message),
    };

    let mut take = |name: &str| form.take_file(name);
    let uploads = match (
        take("portraitPhoto"),
        take("certificationProof"),
        take("residentialAddressProof"),
    ) {
        (Ok(portrait), Ok(certification), Ok(address)) => CaregiverUploads {
            portrait_photo: (portrait.bytes, portrait.content_type),
            certification_proof: (certification.bytes, certification.content_type),
            residential_address_proof: (address.bytes, address.content_type),
        },
        (Err((status, message)), _, _)
        | (_, Err((status, message)), _)
        | (_, _, Err((status, message))) => return error_reply(status, message),
    };

    match usecase.register(role, model, uploads).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "Caregiver registered successfully",
                "id": id,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub async fn retrieve_data(
    State(usecase): State<Arc<UseCase>>,
    Path(role): Path<String>,
    _auth: AuthAdmin,
) -> Response {
    let role = match parse_role(&role) {
        Ok(role) => role,
        Err(response) => return response,
    };

    match usecase.list_recent(role).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}
