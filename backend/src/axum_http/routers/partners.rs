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
        enums::partner_kinds::PartnerKind, registrations::CreatePartnerModel,
    },
    infra::db::{
        postgres::postgres_connection::PgPoolSquad, repositories::partners::PartnerPostgres,
    },
    mailer::zeptomail_client::ZeptoMailClient,
    media::cloudinary_client::CloudinaryClient,
};

use crate::auth::AuthAdmin;
use crate::axum_http::{error_responses::error_reply, forms::RegistrationForm};
use crate::usecases::partner_registration::{PartnerRegistrationUseCase, PartnerUpload};

type UseCase = PartnerRegistrationUseCase<PartnerPostgres, CloudinaryClient, ZeptoMailClient>;

pub fn routes(
    db_pool: Arc<PgPoolSquad>,
    media_storage: Arc<CloudinaryClient>,
    mailer: Arc<ZeptoMailClient>,
    welcome_template: String,
) -> Router {
    let usecase = PartnerRegistrationUseCase::new(
        Arc::new(PartnerPostgres::new(Arc::clone(&db_pool))),
        media_storage,
        mailer,
        welcome_template,
    );

    Router::new()
        .route("/:kind", post(register_partner).get(retrieve_data))
        .with_state(Arc::new(usecase))
}

fn parse_kind(kind: &str) -> Result<PartnerKind, Response> {
    PartnerKind::from_str(kind).ok_or_else(|| {
        error_reply(
            StatusCode::NOT_FOUND,
            format!("Unknown partner type: {}", kind),
        )
    })
}

pub async fn register_partner(
    State(usecase): State<Arc<UseCase>>,
    Path(kind): Path<String>,
    multipart: Multipart,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    let mut form = match RegistrationForm::collect(multipart).await {
        Ok(form) => form,
        Err((status, message)) => return error_reply(status, message),
    };

    let model: CreatePartnerModel = match form.parse_fields() {
        Ok(model) => model,
        Err((status, message)) => return error_reply(status, message),
    };

    let uploads = form
        .take_all_files()
        .into_iter()
        .map(|file| PartnerUpload {
            field_name: file.field_name,
            bytes: file.bytes,
            content_type: file.content_type,
        })
        .collect();

    match usecase.register(kind, model, uploads).await {
        Ok(id) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "message": "Partner registered successfully",
                "id": id,
            })),
        )
            .into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}

pub async fn retrieve_data(
    State(usecase): State<Arc<UseCase>>,
    Path(kind): Path<String>,
    _auth: AuthAdmin,
) -> Response {
    let kind = match parse_kind(&kind) {
        Ok(kind) => kind,
        Err(response) => return response,
    };

    match usecase.list_recent(kind).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => error_reply(err.status_code(), err.to_string()),
    }
}
