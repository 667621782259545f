use std::sync::Arc;

use anyhow::Context;
use crates::domain::{
    entities::partners::{InsertPartnerEntity, PartnerEntity},
    repositories::{
        mailer::TransactionalMailer, media_storage::MediaStorageClient,
        partners::PartnerRepository,
    },
    value_objects::{enums::partner_kinds::PartnerKind, registrations::CreatePartnerModel},
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PartnerRegistrationError {
    #[error("Partner with this email or phone number already exists.")]
    AlreadyRegistered,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PartnerRegistrationError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PartnerRegistrationError::AlreadyRegistered => StatusCode::CONFLICT,
            PartnerRegistrationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, PartnerRegistrationError>;

/// Named proof documents accompanying a partner registration (CAC
/// certificate, operating licence, address proof, ...).
pub struct PartnerUpload {
    pub field_name: String,
    pub bytes: Vec<u8>,
    pub content_type: String,
}

pub struct PartnerRegistrationUseCase<R, S, M>
where
    R: PartnerRepository + Send + Sync + 'static,
    S: MediaStorageClient + Send + Sync + 'static,
    M: TransactionalMailer + Send + Sync + 'static,
{
    repository: Arc<R>,
    media_storage: Arc<S>,
    mailer: Arc<M>,
    welcome_template: String,
}

impl<R, S, M> PartnerRegistrationUseCase<R, S, M>
where
    R: PartnerRepository + Send + Sync + 'static,
    S: MediaStorageClient + Send + Sync + 'static,
    M: TransactionalMailer + Send + Sync + 'static,
{
    pub fn new(
        repository: Arc<R>,
        media_storage: Arc<S>,
        mailer: Arc<M>,
        welcome_template: String,
    ) -> Self {
        Self {
            repository,
            media_storage,
            mailer,
            welcome_template,
        }
    }

    pub async fn register(
        &self,
        kind: PartnerKind,
        model: CreatePartnerModel,
        uploads: Vec<PartnerUpload>,
    ) -> UseCaseResult<Uuid> {
        let contact = model.contact.clone();

        info!(
            kind = %kind,
            organization = %contact.organization_name,
            "partner_registration: registration started"
        );

        let existing = self
            .repository
            .find_by_email_or_phone(&contact.email, &contact.phone_number)
            .await
            .map_err(|err| {
                error!(
                    kind = %kind,
                    email = %contact.email,
                    db_error = ?err,
                    "partner_registration: uniqueness check failed"
                );
                PartnerRegistrationError::Internal(err)
            })?;

        if existing.is_some() {
            let err = PartnerRegistrationError::AlreadyRegistered;
            warn!(
                kind = %kind,
                email = %contact.email,
                status = err.status_code().as_u16(),
                "partner_registration: duplicate registration attempt"
            );
            return Err(err);
        }

        let mut documents = serde_json::Map::new();
        for upload in uploads {
            let url = self
                .media_storage
                .upload(upload.bytes, &upload.content_type)
                .await
                .with_context(|| format!("{} upload failed", upload.field_name))?;
            documents.insert(upload.field_name, serde_json::Value::String(url));
        }

        let insert_entity = InsertPartnerEntity {
            kind: kind.to_string(),
            organization_name: contact.organization_name.clone(),
            contact: serde_json::to_value(&model.contact)
                .context("failed to serialize partner contact")?,
            details: model.details,
            documents: serde_json::Value::Object(documents),
        };

        let id = self.repository.create(insert_entity).await.map_err(|err| {
            error!(
                kind = %kind,
                email = %contact.email,
                db_error = ?err,
                "partner_registration: failed to persist record"
            );
            PartnerRegistrationError::Internal(err)
        })?;

        info!(kind = %kind, %id, "partner_registration: registered");

        if let Err(err) = self
            .mailer
            .send_template(
                &self.welcome_template,
                &contact.email,
                &contact.organization_name,
                "✉️ Welcome To Solace!",
                serde_json::json!({ "firstName": contact.organization_name }),
            )
            .await
        {
            warn!(
                email = %contact.email,
                error = ?err,
                "partner_registration: welcome email failed"
            );
        }

        Ok(id)
    }

    pub async fn list_recent(&self, kind: PartnerKind) -> UseCaseResult<Vec<PartnerEntity>> {
        self.repository
            .list_recent_by_kind(kind.as_str(), 20)
            .await
            .map_err(PartnerRegistrationError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::repositories::{
        mailer::MockTransactionalMailer, media_storage::MockMediaStorageClient,
        partners::MockPartnerRepository,
    };

    fn sample_model() -> CreatePartnerModel {
        serde_json::from_value(serde_json::json!({
            "contact": {
                "organizationName": "St. Bridget Hospital",
                "email": "admin@stbridget.ng",
                "phoneNumber": "08122223333"
            },
            "details": { "cacNumber": "RC-102030" }
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn register_collects_document_urls_by_field_name() {
        let mut repo = MockPartnerRepository::new();
        let mut media = MockMediaStorageClient::new();
        let mut mailer = MockTransactionalMailer::new();

        repo.expect_find_by_email_or_phone()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        media
            .expect_upload()
            .times(2)
            .returning(|bytes, _| {
                let url = format!("https://media/doc-{}", bytes.len());
                Box::pin(async move { Ok(url) })
            });

        repo.expect_create()
            .withf(|entity| {
                entity.kind == "hospitals-and-clinics"
                    && entity.documents["cacCertificateProof"] == "https://media/doc-1"
                    && entity.documents["licenseToOperateProof"] == "https://media/doc-2"
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(Uuid::new_v4()) }));

        mailer
            .expect_send_template()
            .times(1)
            .returning(|_, _, _, _, _| Box::pin(async { Ok(()) }));

        let usecase = PartnerRegistrationUseCase::new(
            Arc::new(repo),
            Arc::new(media),
            Arc::new(mailer),
            "welcome-template".to_string(),
        );

        let uploads = vec![
            PartnerUpload {
                field_name: "cacCertificateProof".to_string(),
                bytes: vec![1],
                content_type: "application/pdf".to_string(),
            },
            PartnerUpload {
                field_name: "licenseToOperateProof".to_string(),
                bytes: vec![2, 2],
                content_type: "application/pdf".to_string(),
            },
        ];

        usecase
            .register(PartnerKind::Hospital, sample_model(), uploads)
            .await
            .unwrap();
    }
}
