use std::sync::Arc;

use crates::domain::{
    entities::waitlist_entries::{InsertWaitlistEntryEntity, WaitlistEntryEntity},
    repositories::waitlist_entries::WaitlistEntryRepository,
    value_objects::registrations::CreateWaitlistEntryModel,
};
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum WaitlistError {
    #[error("User already Registered with email or phone number")]
    AlreadyRegistered,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl WaitlistError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            WaitlistError::AlreadyRegistered => StatusCode::CONFLICT,
            WaitlistError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, WaitlistError>;

pub struct WaitlistUseCase<R>
where
    R: WaitlistEntryRepository + Send + Sync + 'static,
{
    repository: Arc<R>,
}

impl<R> WaitlistUseCase<R>
where
    R: WaitlistEntryRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn join(&self, model: CreateWaitlistEntryModel) -> UseCaseResult<Uuid> {
        let existing = self
            .repository
            .find_by_email_or_phone(&model.email, &model.phone_number)
            .await
            .map_err(|err| {
                error!(
                    email = %model.email,
                    db_error = ?err,
                    "waitlist: uniqueness check failed"
                );
                WaitlistError::Internal(err)
            })?;

        if existing.is_some() {
            let err = WaitlistError::AlreadyRegistered;
            warn!(
                email = %model.email,
                status = err.status_code().as_u16(),
                "waitlist: duplicate signup attempt"
            );
            return Err(err);
        }

        let id = self
            .repository
            .create(InsertWaitlistEntryEntity {
                first_name: model.first_name,
                last_name: model.last_name,
                email: model.email.clone(),
                phone_number: model.phone_number,
            })
            .await
            .map_err(|err| {
                error!(email = %model.email, db_error = ?err, "waitlist: failed to persist entry");
                WaitlistError::Internal(err)
            })?;

        info!(%id, "waitlist: new signup");
        Ok(id)
    }

    pub async fn list_recent(&self) -> UseCaseResult<Vec<WaitlistEntryEntity>> {
        self.repository
            .list_recent(20)
            .await
            .map_err(WaitlistError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crates::domain::repositories::waitlist_entries::MockWaitlistEntryRepository;

    fn sample_model() -> CreateWaitlistEntryModel {
        serde_json::from_value(serde_json::json!({
            "firstName": "Tunde",
            "lastName": "Bakare",
            "email": "tunde@example.com",
            "phoneNumber": "08155556666"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn join_persists_a_new_entry() {
        let mut repo = MockWaitlistEntryRepository::new();

        repo.expect_find_by_email_or_phone()
            .returning(|_, _| Box::pin(async { Ok(None) }));
        repo.expect_create()
            .withf(|entity| entity.email == "tunde@example.com")
            .times(1)
            .returning(|_| Box::pin(async { Ok(Uuid::new_v4()) }));

        let usecase = WaitlistUseCase::new(Arc::new(repo));
        usecase.join(sample_model()).await.unwrap();
    }

    #[tokio::test]
    async fn duplicate_signup_is_a_conflict() {
        let mut repo = MockWaitlistEntryRepository::new();

        repo.expect_find_by_email_or_phone().returning(|_, _| {
            Box::pin(async {
                Ok(Some(WaitlistEntryEntity {
                    id: Uuid::new_v4(),
                    first_name: "Tunde".to_string(),
                    last_name: "Bakare".to_string(),
                    email: "tunde@example.com".to_string(),
                    phone_number: "08155556666".to_string(),
                    created_at: Utc::now(),
                }))
            })
        });

        let usecase = WaitlistUseCase::new(Arc::new(repo));
        let err = usecase.join(sample_model()).await.unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
    }
}
