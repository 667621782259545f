use std::sync::Arc;

use crates::domain::{
    entities::{
        farewell_covers::FarewellCoverEntity, healthy_elders_clubs::HealthyEldersClubEntity,
    },
    repositories::{
        farewell_covers::FarewellCoverRepository,
        healthy_elders_clubs::HealthyEldersClubRepository,
    },
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum SubscriptionQueryError {
    #[error("Invalid subscription type")]
    InvalidType,
    #[error("Subscription not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl SubscriptionQueryError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            SubscriptionQueryError::InvalidType => StatusCode::BAD_REQUEST,
            SubscriptionQueryError::NotFound => StatusCode::NOT_FOUND,
            SubscriptionQueryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, SubscriptionQueryError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSubscriptions {
    pub farewell_cover: Vec<FarewellCoverEntity>,
    pub healthy_elders_club: Vec<HealthyEldersClubEntity>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SubscriptionRecord {
    FarewellCover(FarewellCoverEntity),
    HealthyEldersClub(HealthyEldersClubEntity),
}

/// Read side for subscriber dashboards: both products' records by email, or
/// one record by type and id.
pub struct SubscriptionQueryUseCase<F, H>
where
    F: FarewellCoverRepository + Send + Sync + 'static,
    H: HealthyEldersClubRepository + Send + Sync + 'static,
{
    farewell_cover_repo: Arc<F>,
    healthy_elders_repo: Arc<H>,
}

impl<F, H> SubscriptionQueryUseCase<F, H>
where
    F: FarewellCoverRepository + Send + Sync + 'static,
    H: HealthyEldersClubRepository + Send + Sync + 'static,
{
    pub fn new(farewell_cover_repo: Arc<F>, healthy_elders_repo: Arc<H>) -> Self {
        Self {
            farewell_cover_repo,
            healthy_elders_repo,
        }
    }

    pub async fn get_user_subscriptions(&self, email: &str) -> UseCaseResult<UserSubscriptions> {
        info!(email, "subscriptions: loading user subscriptions");

        let farewell_cover = self
            .farewell_cover_repo
            .find_by_subscriber_email(email)
            .await
            .map_err(|err| {
                error!(email, db_error = ?err, "subscriptions: farewell cover lookup failed");
                SubscriptionQueryError::Internal(err)
            })?;

        let healthy_elders_club = self
            .healthy_elders_repo
            .find_by_subscriber_email(email)
            .await
            .map_err(|err| {
                error!(email, db_error = ?err, "subscriptions: healthy elders lookup failed");
                SubscriptionQueryError::Internal(err)
            })?;

        Ok(UserSubscriptions {
            farewell_cover,
            healthy_elders_club,
        })
    }

    pub async fn get_subscription(
        &self,
        subscription_type: &str,
        id: &str,
    ) -> UseCaseResult<SubscriptionRecord> {
        let record = match subscription_type {
            "farewell-cover" => self
                .farewell_cover_repo
                .find_by_id(id)
                .await
                .map_err(SubscriptionQueryError::Internal)?
                .map(SubscriptionRecord::FarewellCover),
            "healthy-elders-club" => self
                .healthy_elders_repo
                .find_by_id(id)
                .await
                .map_err(SubscriptionQueryError::Internal)?
                .map(SubscriptionRecord::HealthyEldersClub),
            other => {
                warn!(
                    subscription_type = other,
                    "subscriptions: unknown subscription type requested"
                );
                return Err(SubscriptionQueryError::InvalidType);
            }
        };

        record.ok_or_else(|| {
            warn!(subscription_type, id, "subscriptions: record not found");
            SubscriptionQueryError::NotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::repositories::{
        farewell_covers::MockFarewellCoverRepository,
        healthy_elders_clubs::MockHealthyEldersClubRepository,
    };

    #[tokio::test]
    async fn unknown_type_is_a_client_error() {
        let usecase = SubscriptionQueryUseCase::new(
            Arc::new(MockFarewellCoverRepository::new()),
            Arc::new(MockHealthyEldersClubRepository::new()),
        );

        let err = usecase
            .get_subscription("life-insurance", "SFC-AB12CD")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let mut farewell = MockFarewellCoverRepository::new();
        farewell
            .expect_find_by_id()
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = SubscriptionQueryUseCase::new(
            Arc::new(farewell),
            Arc::new(MockHealthyEldersClubRepository::new()),
        );

        let err = usecase
            .get_subscription("farewell-cover", "SFC-MISSIN")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }
}
