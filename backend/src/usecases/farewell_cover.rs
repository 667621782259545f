use std::sync::Arc;

use anyhow::Context;
use crates::domain::{
    entities::farewell_covers::{FarewellCoverEntity, InsertFarewellCoverEntity},
    repositories::{
        farewell_covers::FarewellCoverRepository, media_storage::MediaStorageClient,
        payment_gateway::PaymentGateway,
    },
    value_objects::{
        custom_ids::{FAREWELL_COVER_PREFIX, generate_record_id},
        enums::subscription_statuses::FarewellCoverStatus,
        farewell_cover::CreateFarewellCoverModel,
        paystack_webhook::TransactionType,
    },
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::config_model::FarewellPlanCodes;
use crate::usecases::pricing::{amount_to_kobo, farewell_subscription_amount};

#[derive(Debug, Error)]
pub enum FarewellCoverError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl FarewellCoverError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            FarewellCoverError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, FarewellCoverError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarewellCoverCheckout {
    pub subscription_id: String,
    pub paystack_link: String,
    pub paystack_customer_created: bool,
}

pub struct FarewellCoverUseCase<R, P, S>
where
    R: FarewellCoverRepository + Send + Sync + 'static,
    P: PaymentGateway + Send + Sync + 'static,
    S: MediaStorageClient + Send + Sync + 'static,
{
    repository: Arc<R>,
    payment_gateway: Arc<P>,
    media_storage: Arc<S>,
    plan_codes: FarewellPlanCodes,
}

impl<R, P, S> FarewellCoverUseCase<R, P, S>
where
    R: FarewellCoverRepository + Send + Sync + 'static,
    P: PaymentGateway + Send + Sync + 'static,
    S: MediaStorageClient + Send + Sync + 'static,
{
    pub fn new(
        repository: Arc<R>,
        payment_gateway: Arc<P>,
        media_storage: Arc<S>,
        plan_codes: FarewellPlanCodes,
    ) -> Self {
        Self {
            repository,
            payment_gateway,
            media_storage,
            plan_codes,
        }
    }

    /// Registers a Farewell Cover plan: price the selection, make sure the
    /// subscriber exists at Paystack, upload the beneficiary photo, persist
    /// the record as inactive, then hand back the checkout link.
    pub async fn create(
        &self,
        mut model: CreateFarewellCoverModel,
        photo: Vec<u8>,
        photo_content_type: String,
    ) -> UseCaseResult<FarewellCoverCheckout> {
        let subscriber = model.subscriber_details.clone();
        let details = &mut model.subscription_details;

        details.subscription_amount =
            farewell_subscription_amount(details.farewell_plan, details.service_duration);

        info!(
            email = %subscriber.email,
            plan = %details.farewell_plan,
            duration = %details.service_duration,
            amount = details.subscription_amount,
            "farewell_cover: registration started"
        );

        let customer_created = self.ensure_paystack_customer(&subscriber).await?;

        let photo_url = self
            .media_storage
            .upload(photo, &photo_content_type)
            .await
            .map_err(|err| {
                error!(
                    email = %subscriber.email,
                    error = ?err,
                    "farewell_cover: beneficiary photo upload failed"
                );
                FarewellCoverError::Internal(err)
            })?;
        model.beneficiary_personal_details.photo = Some(photo_url);

        let id = self.generate_unique_id().await?;
        let details = model.subscription_details.clone();

        let insert_entity = InsertFarewellCoverEntity {
            id: id.clone(),
            relationship_with_beneficiary: model.relationship_with_beneficiary.clone(),
            subscriber_details: serde_json::to_value(&model.subscriber_details)
                .context("failed to serialize subscriber details")?,
            beneficiary_personal_details: serde_json::to_value(
                &model.beneficiary_personal_details,
            )
            .context("failed to serialize beneficiary personal details")?,
            beneficiary_health_details: serde_json::to_value(&model.beneficiary_health_details)
                .context("failed to serialize beneficiary health details")?,
            farewell_plan: details.farewell_plan.to_string(),
            service_duration: details.service_duration.to_string(),
            subscription_amount: details.subscription_amount,
            auto_renewal: details.auto_renewal.to_string(),
            status: FarewellCoverStatus::Inactive.to_string(),
            referral_code: details.referral_code.clone(),
            referrer_name: details.referrer_name.clone(),
        };

        self.repository.create(insert_entity).await.map_err(|err| {
            error!(%id, db_error = ?err, "farewell_cover: failed to persist record");
            FarewellCoverError::Internal(err)
        })?;

        let plan_code = details.auto_renewal.is_on().then(|| {
            self.plan_codes
                .code_for(details.farewell_plan, details.service_duration)
                .to_string()
        });

        let metadata = serde_json::json!({
            "subscriptionId": id,
            "transactionType": TransactionType::FarewellCover.as_str(),
            "subscriptionDetails": serde_json::to_value(&details)
                .context("failed to serialize subscription details")?,
            "subscriberDetails": serde_json::to_value(&subscriber)
                .context("failed to serialize subscriber details")?,
        });

        let paystack_link = self
            .payment_gateway
            .initialize_transaction(
                &subscriber.email,
                amount_to_kobo(details.subscription_amount),
                metadata,
                plan_code,
            )
            .await
            .map_err(|err| {
                error!(
                    %id,
                    email = %subscriber.email,
                    error = ?err,
                    "farewell_cover: paystack transaction initialization failed"
                );
                FarewellCoverError::Internal(err)
            })?;

        info!(%id, "farewell_cover: registration completed, awaiting payment");

        Ok(FarewellCoverCheckout {
            subscription_id: id,
            paystack_link,
            paystack_customer_created: customer_created,
        })
    }

    pub async fn list_recent(&self) -> UseCaseResult<Vec<FarewellCoverEntity>> {
        self.repository
            .list_recent(20)
            .await
            .map_err(FarewellCoverError::Internal)
    }

    async fn ensure_paystack_customer(
        &self,
        subscriber: &crates::domain::value_objects::farewell_cover::SubscriberDetails,
    ) -> UseCaseResult<bool> {
        let existing = self
            .payment_gateway
            .find_customer(&subscriber.email)
            .await
            .map_err(|err| {
                error!(
                    email = %subscriber.email,
                    error = ?err,
                    "farewell_cover: paystack customer lookup failed"
                );
                FarewellCoverError::Internal(err)
            })?;

        if existing.is_some() {
            return Ok(false);
        }

        self.payment_gateway
            .create_customer(
                &subscriber.email,
                &subscriber.first_name,
                &subscriber.last_name,
                &subscriber.phone_number,
            )
            .await
            .map_err(|err| {
                error!(
                    email = %subscriber.email,
                    error = ?err,
                    "farewell_cover: paystack customer creation failed"
                );
                FarewellCoverError::Internal(err)
            })?;

        info!(email = %subscriber.email, "farewell_cover: paystack customer created");
        Ok(true)
    }

    async fn generate_unique_id(&self) -> UseCaseResult<String> {
        loop {
            let candidate = generate_record_id(FAREWELL_COVER_PREFIX);
            let exists = self
                .repository
                .id_exists(&candidate)
                .await
                .map_err(FarewellCoverError::Internal)?;

            if !exists {
                return Ok(candidate);
            }

            warn!(%candidate, "farewell_cover: record id collision, regenerating");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::{
        repositories::{
            farewell_covers::MockFarewellCoverRepository,
            media_storage::MockMediaStorageClient, payment_gateway::MockPaymentGateway,
        },
        value_objects::farewell_cover::SubscriberDetails,
    };
    use crates::payments::paystack_client::PaystackCustomer;

    fn plan_codes() -> FarewellPlanCodes {
        FarewellPlanCodes {
            pink_quarterly: "PLN_pq".to_string(),
            pink_biannual: "PLN_pb".to_string(),
            pink_annual: "PLN_pa".to_string(),
            blue_quarterly: "PLN_bq".to_string(),
            blue_biannual: "PLN_bb".to_string(),
            blue_annual: "PLN_ba".to_string(),
            red_quarterly: "PLN_rq".to_string(),
            red_biannual: "PLN_rb".to_string(),
            red_annual: "PLN_ra".to_string(),
        }
    }

    fn sample_model() -> CreateFarewellCoverModel {
        serde_json::from_value(serde_json::json!({
            "relationshipWithBeneficiary": "Mother",
            "subscriberDetails": {
                "firstName": "Ada",
                "lastName": "Obi",
                "email": "a@b.com",
                "phoneNumber": "08012345678"
            },
            "beneficiaryPersonalDetails": {
                "title": "Mrs",
                "firstName": "Chidinma",
                "lastName": "Obi",
                "phoneNumber": "08087654321",
                "dob": "1950-06-01",
                "gender": "Female",
                "address": {
                    "stateOfResidence": "Lagos",
                    "localGovtOfResidence": "Ikeja",
                    "detailedResidentialAddress": "12 Allen Avenue"
                }
            },
            "beneficiaryHealthDetails": {
                "healthCondition": "None reported"
            },
            "subscriptionDetails": {
                "farewellPlan": "Blue Diamond Plan",
                "serviceDuration": "per annual",
                "autoRenewal": "on"
            }
        }))
        .unwrap()
    }

    fn existing_customer() -> PaystackCustomer {
        serde_json::from_value(serde_json::json!({
            "customer_code": "CUS_123",
            "email": "a@b.com"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_computes_amount_and_attaches_plan_code_when_auto_renewing() {
        let mut repo = MockFarewellCoverRepository::new();
        let mut gateway = MockPaymentGateway::new();
        let mut media = MockMediaStorageClient::new();

        gateway
            .expect_find_customer()
            .returning(|_| Box::pin(async { Ok(Some(existing_customer())) }));

        media
            .expect_upload()
            .returning(|_, _| Box::pin(async { Ok("https://media/photo.jpg".to_string()) }));

        repo.expect_id_exists()
            .returning(|_| Box::pin(async { Ok(false) }));
        repo.expect_create()
            .withf(|entity| {
                entity.status == "inactive"
                    && entity.subscription_amount == 150000
                    && entity.id.starts_with("SFC-")
                    && entity.beneficiary_personal_details["photo"]
                        == "https://media/photo.jpg"
            })
            .times(1)
            .returning(|entity| {
                let id = entity.id.clone();
                Box::pin(async move { Ok(id) })
            });

        gateway
            .expect_initialize_transaction()
            .withf(|email, amount_kobo, metadata, plan_code| {
                email == "a@b.com"
                    && *amount_kobo == 15_000_000
                    && metadata["transactionType"] == "Farewell Cover"
                    && metadata["subscriptionDetails"]["subscriptionAmount"] == 150000
                    && plan_code.as_deref() == Some("PLN_ba")
            })
            .times(1)
            .returning(|_, _, _, _| {
                Box::pin(async { Ok("https://checkout.paystack.com/abc".to_string()) })
            });

        let usecase = FarewellCoverUseCase::new(
            Arc::new(repo),
            Arc::new(gateway),
            Arc::new(media),
            plan_codes(),
        );

        let checkout = usecase
            .create(sample_model(), vec![0xFF, 0xD8], "image/jpeg".to_string())
            .await
            .unwrap();

        assert!(checkout.subscription_id.starts_with("SFC-"));
        assert_eq!(checkout.paystack_link, "https://checkout.paystack.com/abc");
        assert!(!checkout.paystack_customer_created);
    }

    #[tokio::test]
    async fn create_registers_missing_paystack_customer() {
        let mut repo = MockFarewellCoverRepository::new();
        let mut gateway = MockPaymentGateway::new();
        let mut media = MockMediaStorageClient::new();

        gateway
            .expect_find_customer()
            .returning(|_| Box::pin(async { Ok(None) }));
        gateway
            .expect_create_customer()
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok(existing_customer()) }));

        media
            .expect_upload()
            .returning(|_, _| Box::pin(async { Ok("https://media/photo.jpg".to_string()) }));
        repo.expect_id_exists()
            .returning(|_| Box::pin(async { Ok(false) }));
        repo.expect_create().returning(|entity| {
            let id = entity.id.clone();
            Box::pin(async move { Ok(id) })
        });
        gateway.expect_initialize_transaction().returning(|_, _, _, _| {
            Box::pin(async { Ok("https://checkout.paystack.com/abc".to_string()) })
        });

        let usecase = FarewellCoverUseCase::new(
            Arc::new(repo),
            Arc::new(gateway),
            Arc::new(media),
            plan_codes(),
        );

        let checkout = usecase
            .create(sample_model(), vec![0xFF, 0xD8], "image/jpeg".to_string())
            .await
            .unwrap();

        assert!(checkout.paystack_customer_created);
    }

    #[tokio::test]
    async fn id_generation_retries_on_collision() {
        let mut repo = MockFarewellCoverRepository::new();
        let mut gateway = MockPaymentGateway::new();
        let mut media = MockMediaStorageClient::new();

        gateway
            .expect_find_customer()
            .returning(|_| Box::pin(async { Ok(Some(existing_customer())) }));
        media
            .expect_upload()
            .returning(|_, _| Box::pin(async { Ok("https://media/photo.jpg".to_string()) }));

        let mut attempts = 0;
        repo.expect_id_exists().times(2).returning(move |_| {
            attempts += 1;
            let exists = attempts == 1;
            Box::pin(async move { Ok(exists) })
        });
        repo.expect_create().returning(|entity| {
            let id = entity.id.clone();
            Box::pin(async move { Ok(id) })
        });
        gateway.expect_initialize_transaction().returning(|_, _, _, _| {
            Box::pin(async { Ok("https://checkout.paystack.com/abc".to_string()) })
        });

        let usecase = FarewellCoverUseCase::new(
            Arc::new(repo),
            Arc::new(gateway),
            Arc::new(media),
            plan_codes(),
        );

        usecase
            .create(sample_model(), vec![0xFF, 0xD8], "image/jpeg".to_string())
            .await
            .unwrap();
    }
}
