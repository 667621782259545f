use std::sync::Arc;

use anyhow::Context;
use crates::domain::{
    entities::caregivers::{CaregiverEntity, InsertCaregiverEntity},
    repositories::{
        caregivers::CaregiverRepository, mailer::TransactionalMailer,
        media_storage::MediaStorageClient,
    },
    value_objects::{
        enums::caregiver_roles::CaregiverRole, registrations::CreateCaregiverModel,
    },
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CaregiverRegistrationError {
    #[error("Caregiver with this email or phone number already exists.")]
    AlreadyRegistered,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CaregiverRegistrationError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            CaregiverRegistrationError::AlreadyRegistered => StatusCode::CONFLICT,
            CaregiverRegistrationError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, CaregiverRegistrationError>;

/// Uploaded proof documents accompanying a caregiver registration, as
/// (bytes, content type) pairs.
pub struct CaregiverUploads {
    pub portrait_photo: (Vec<u8>, String),
    pub certification_proof: (Vec<u8>, String),
    pub residential_address_proof: (Vec<u8>, String),
}

pub struct CaregiverRegistrationUseCase<R, S, M>
where
    R: CaregiverRepository + Send + Sync + 'static,
    S: MediaStorageClient + Send + Sync + 'static,
    M: TransactionalMailer + Send + Sync + 'static,
{
    repository: Arc<R>,
    media_storage: Arc<S>,
    mailer: Arc<M>,
    welcome_template: String,
}

impl<R, S, M> CaregiverRegistrationUseCase<R, S, M>
where
    R: CaregiverRepository + Send + Sync + 'static,
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
        role: CaregiverRole,
        model: CreateCaregiverModel,
        uploads: CaregiverUploads,
    ) -> UseCaseResult<Uuid> {
        let personal_info = model.personal_info.clone();

        info!(
            role = %role,
            email = %personal_info.email,
            "caregiver_registration: registration started"
        );

        let existing = self
            .repository
            .find_by_email_or_phone(&personal_info.email, &personal_info.phone_number)
            .await
            .map_err(|err| {
                error!(
                    role = %role,
                    email = %personal_info.email,
                    db_error = ?err,
                    "caregiver_registration: uniqueness check failed"
                );
                CaregiverRegistrationError::Internal(err)
            })?;

        if existing.is_some() {
            let err = CaregiverRegistrationError::AlreadyRegistered;
            warn!(
                role = %role,
                email = %personal_info.email,
                status = err.status_code().as_u16(),
                "caregiver_registration: duplicate registration attempt"
            );
            return Err(err);
        }

        let (portrait_bytes, portrait_ct) = uploads.portrait_photo;
        let portrait_photo = self
            .media_storage
            .upload(portrait_bytes, &portrait_ct)
            .await
            .context("portrait photo upload failed")?;

        let (cert_bytes, cert_ct) = uploads.certification_proof;
        let certification_proof = self
            .media_storage
            .upload(cert_bytes, &cert_ct)
            .await
            .context("certification proof upload failed")?;

        let (addr_bytes, addr_ct) = uploads.residential_address_proof;
        let residential_address_proof = self
            .media_storage
            .upload(addr_bytes, &addr_ct)
            .await
            .context("residential address proof upload failed")?;

        let mut education = model.education;
        merge_document_url(&mut education, "certificationProof", certification_proof);
        let mut location = model.location;
        merge_document_url(
            &mut location,
            "residentialAddressProof",
            residential_address_proof,
        );

        let insert_entity = InsertCaregiverEntity {
            role: role.to_string(),
            license_number: model.license_number,
            specialty: model.specialty,
            portrait_photo,
            personal_info: serde_json::to_value(&model.personal_info)
                .context("failed to serialize personal info")?,
            employment: model.employment,
            education,
            location,
        };

        let id = self.repository.create(insert_entity).await.map_err(|err| {
            error!(
                role = %role,
                email = %personal_info.email,
                db_error = ?err,
                "caregiver_registration: failed to persist record"
            );
            CaregiverRegistrationError::Internal(err)
        })?;

        info!(role = %role, %id, "caregiver_registration: registered");

        if let Err(err) = self
            .mailer
            .send_template(
                &self.welcome_template,
                &personal_info.email,
                &personal_info.first_name,
                "✉️ Welcome To Solace!",
                serde_json::json!({ "firstName": personal_info.first_name }),
            )
            .await
        {
            warn!(
                email = %personal_info.email,
                error = ?err,
                "caregiver_registration: welcome email failed"
            );
        }

        Ok(id)
    }

    pub async fn list_recent(&self, role: CaregiverRole) -> UseCaseResult<Vec<CaregiverEntity>> {
        self.repository
            .list_recent_by_role(role.as_str(), 20)
            .await
            .map_err(CaregiverRegistrationError::Internal)
    }
}

/// Attaches a hosted document URL to a role-specific JSON block, creating the
/// object when the form omitted the block entirely.
fn merge_document_url(block: &mut serde_json::Value, key: &str, url: String) {
    match block.as_object_mut() {
        Some(object) => {
            object.insert(key.to_string(), serde_json::Value::String(url));
        }
        None => {
            *block = serde_json::json!({ key: url });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::repositories::{
        caregivers::MockCaregiverRepository, mailer::MockTransactionalMailer,
        media_storage::MockMediaStorageClient,
    };

    fn sample_model() -> CreateCaregiverModel {
        serde_json::from_value(serde_json::json!({
            "licenseNumber": "MCDN-44821",
            "specialty": "Cardiology",
            "personalInfo": {
                "firstName": "Emeka",
                "lastName": "Ike",
                "email": "emeka@example.com",
                "phoneNumber": "08033334444"
            },
            "employment": { "currentEmployer": "Lagos General" },
            "education": { "highestDegree": "MBBS" },
            "location": { "state": "Lagos" }
        }))
        .unwrap()
    }

    fn existing_caregiver() -> CaregiverEntity {
        let row = crates::domain::entities::caregivers::CaregiverRow {
            id: Uuid::new_v4(),
            role: "doctor".to_string(),
            license_number: "MCDN-1".to_string(),
            specialty: None,
            portrait_photo: "https://media/p".to_string(),
            personal_info: serde_json::json!({
                "firstName": "Emeka",
                "lastName": "Ike",
                "email": "emeka@example.com",
                "phoneNumber": "08033334444"
            }),
            employment: serde_json::json!({}),
            education: serde_json::json!({}),
            location: serde_json::json!({}),
            created_at: chrono::Utc::now(),
        };

        row.try_into().unwrap()
    }

    fn sample_uploads() -> CaregiverUploads {
        CaregiverUploads {
            portrait_photo: (vec![1], "image/jpeg".to_string()),
            certification_proof: (vec![2], "application/pdf".to_string()),
            residential_address_proof: (vec![3], "application/pdf".to_string()),
        }
    }

    #[tokio::test]
    async fn register_uploads_documents_and_sends_welcome_mail() {
        let mut repo = MockCaregiverRepository::new();
        let mut media = MockMediaStorageClient::new();
        let mut mailer = MockTransactionalMailer::new();

        repo.expect_find_by_email_or_phone()
            .returning(|_, _| Box::pin(async { Ok(None) }));

        let mut upload_count = 0;
        media.expect_upload().times(3).returning(move |_, _| {
            upload_count += 1;
            let url = format!("https://media/doc-{upload_count}");
            Box::pin(async move { Ok(url) })
        });

        repo.expect_create()
            .withf(|entity| {
                entity.role == "doctor"
                    && entity.portrait_photo == "https://media/doc-1"
                    && entity.education["certificationProof"] == "https://media/doc-2"
                    && entity.location["residentialAddressProof"] == "https://media/doc-3"
            })
            .times(1)
            .returning(|_| Box::pin(async { Ok(Uuid::new_v4()) }));

        mailer
            .expect_send_template()
            .withf(|_, to, name, subject, _| {
                to == "emeka@example.com" && name == "Emeka" && subject == "✉️ Welcome To Solace!"
            })
            .times(1)
            .returning(|_, _, _, _, _| Box::pin(async { Ok(()) }));

        let usecase = CaregiverRegistrationUseCase::new(
            Arc::new(repo),
            Arc::new(media),
            Arc::new(mailer),
            "welcome-template".to_string(),
        );

        usecase
            .register(CaregiverRole::Doctor, sample_model(), sample_uploads())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_conflict() {
        let mut repo = MockCaregiverRepository::new();
        let media = MockMediaStorageClient::new();
        let mailer = MockTransactionalMailer::new();

        repo.expect_find_by_email_or_phone()
            .returning(|_, _| Box::pin(async { Ok(Some(existing_caregiver())) }));

        let usecase = CaregiverRegistrationUseCase::new(
            Arc::new(repo),
            Arc::new(media),
            Arc::new(mailer),
            "welcome-template".to_string(),
        );

        let err = usecase
            .register(CaregiverRole::Doctor, sample_model(), sample_uploads())
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
    }
}
