use std::sync::Arc;

use anyhow::Context;
use crates::domain::{
    entities::healthy_elders_clubs::{HealthyEldersClubEntity, InsertHealthyEldersClubEntity},
    repositories::{
        healthy_elders_clubs::HealthyEldersClubRepository, payment_gateway::PaymentGateway,
    },
    value_objects::{
        custom_ids::{HEALTHY_ELDERS_PREFIX, generate_record_id},
        enums::subscription_statuses::HealthyEldersStatus,
        healthy_elders::CreateHealthyEldersModel,
        paystack_webhook::TransactionType,
    },
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::usecases::pricing::{
    HEALTHY_ELDERS_MEMBERSHIP_FEE, HEALTHY_ELDERS_TOTAL_AMOUNT, amount_to_kobo,
};

#[derive(Debug, Error)]
pub enum HealthyEldersError {
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl HealthyEldersError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            HealthyEldersError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type UseCaseResult<T> = std::result::Result<T, HealthyEldersError>;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthyEldersCheckout {
    pub subscription_id: String,
    pub paystack_link: String,
    pub paystack_customer_created: bool,
}

pub struct HealthyEldersClubUseCase<R, P>
where
    R: HealthyEldersClubRepository + Send + Sync + 'static,
    P: PaymentGateway + Send + Sync + 'static,
{
    repository: Arc<R>,
    payment_gateway: Arc<P>,
    plan_code: String,
}

impl<R, P> HealthyEldersClubUseCase<R, P>
where
    R: HealthyEldersClubRepository + Send + Sync + 'static,
    P: PaymentGateway + Send + Sync + 'static,
{
    pub fn new(repository: Arc<R>, payment_gateway: Arc<P>, plan_code: String) -> Self {
        Self {
            repository,
            payment_gateway,
            plan_code,
        }
    }

    /// Registers a club membership: fixed pricing, unverified until the
    /// payment webhook confirms the charge.
    pub async fn create(
        &self,
        mut model: CreateHealthyEldersModel,
    ) -> UseCaseResult<HealthyEldersCheckout> {
        let subscriber = model.subscriber_details.clone();

        // Fees are fixed product-wide; overwrite whatever the form sent.
        model.payment_information.membership_fee = HEALTHY_ELDERS_MEMBERSHIP_FEE;
        model.payment_information.total_amount_to_be_paid = HEALTHY_ELDERS_TOTAL_AMOUNT;

        info!(
            email = %subscriber.email,
            auto_renewal = %model.payment_information.auto_renewal,
            "healthy_elders: registration started"
        );

        let customer_created = self.ensure_paystack_customer(&subscriber).await?;

        let id = self.generate_unique_id().await?;
        let payment = model.payment_information.clone();

        let insert_entity = InsertHealthyEldersClubEntity {
            id: id.clone(),
            subscriber_details: serde_json::to_value(&model.subscriber_details)
                .context("failed to serialize subscriber details")?,
            beneficiary_details: serde_json::to_value(&model.beneficiary_details)
                .context("failed to serialize beneficiary details")?,
            membership_fee: payment.membership_fee,
            total_amount_to_be_paid: payment.total_amount_to_be_paid,
            auto_renewal: payment.auto_renewal.to_string(),
            payment_method: payment.payment_method.clone(),
            status: HealthyEldersStatus::Unverified.to_string(),
            referral_code: payment.referral_code.clone(),
            referrer_name: payment.referrer_name.clone(),
        };

        self.repository.create(insert_entity).await.map_err(|err| {
            error!(%id, db_error = ?err, "healthy_elders: failed to persist record");
            HealthyEldersError::Internal(err)
        })?;

        let plan_code = payment
            .auto_renewal
            .is_on()
            .then(|| self.plan_code.clone());

        let metadata = serde_json::json!({
            "subscriptionId": id,
            "transactionType": TransactionType::HealthyEldersClub.as_str(),
            "paymentInformation": serde_json::to_value(&payment)
                .context("failed to serialize payment information")?,
            "subscriberDetails": serde_json::to_value(&subscriber)
                .context("failed to serialize subscriber details")?,
        });

        let paystack_link = self
            .payment_gateway
            .initialize_transaction(
                &subscriber.email,
                amount_to_kobo(payment.total_amount_to_be_paid),
                metadata,
                plan_code,
            )
            .await
            .map_err(|err| {
                error!(
                    %id,
                    email = %subscriber.email,
                    error = ?err,
                    "healthy_elders: paystack transaction initialization failed"
                );
                HealthyEldersError::Internal(err)
            })?;

        info!(%id, "healthy_elders: registration completed, awaiting payment");

        Ok(HealthyEldersCheckout {
            subscription_id: id,
            paystack_link,
            paystack_customer_created: customer_created,
        })
    }

    pub async fn list_recent(&self) -> UseCaseResult<Vec<HealthyEldersClubEntity>> {
        self.repository
            .list_recent(20)
            .await
            .map_err(HealthyEldersError::Internal)
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
                    "healthy_elders: paystack customer lookup failed"
                );
                HealthyEldersError::Internal(err)
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
                    "healthy_elders: paystack customer creation failed"
                );
                HealthyEldersError::Internal(err)
            })?;

        info!(email = %subscriber.email, "healthy_elders: paystack customer created");
        Ok(true)
    }

    async fn generate_unique_id(&self) -> UseCaseResult<String> {
        loop {
            let candidate = generate_record_id(HEALTHY_ELDERS_PREFIX);
            let exists = self
                .repository
                .id_exists(&candidate)
                .await
                .map_err(HealthyEldersError::Internal)?;

            if !exists {
                return Ok(candidate);
            }

            warn!(%candidate, "healthy_elders: record id collision, regenerating");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::repositories::{
        healthy_elders_clubs::MockHealthyEldersClubRepository,
        payment_gateway::MockPaymentGateway,
    };
    use crates::payments::paystack_client::PaystackCustomer;

    fn sample_model() -> CreateHealthyEldersModel {
        serde_json::from_value(serde_json::json!({
            "subscriberDetails": {
                "firstName": "Ngozi",
                "lastName": "Eze",
                "email": "n@e.com",
                "phoneNumber": "08098765432"
            },
            "beneficiaryDetails": {
                "firstName": "Pa",
                "lastName": "Eze",
                "email": "pa@e.com",
                "phoneNumber": "08011112222",
                "location": {
                    "state": "Enugu",
                    "city": "Nsukka",
                    "detailedAddress": "3 University Road"
                }
            },
            "paymentInformation": {
                "membershipFee": 55,
                "totalAmountToBePaid": 99999,
                "autoRenewal": "on"
            }
        }))
        .unwrap()
    }

    fn existing_customer() -> PaystackCustomer {
        serde_json::from_value(serde_json::json!({
            "customer_code": "CUS_456",
            "email": "n@e.com"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_uses_fixed_pricing_and_plan_code_for_auto_renewal() {
        let mut repo = MockHealthyEldersClubRepository::new();
        let mut gateway = MockPaymentGateway::new();

        gateway
            .expect_find_customer()
            .returning(|_| Box::pin(async { Ok(Some(existing_customer())) }));

        repo.expect_id_exists()
            .returning(|_| Box::pin(async { Ok(false) }));
        repo.expect_create()
            .withf(|entity| {
                entity.status == "unverified"
                    && entity.membership_fee == 1000
                    && entity.total_amount_to_be_paid == 12000
                    && entity.id.starts_with("HEC-")
            })
            .times(1)
            .returning(|entity| {
                let id = entity.id.clone();
                Box::pin(async move { Ok(id) })
            });

        gateway
            .expect_initialize_transaction()
            .withf(|email, amount_kobo, metadata, plan_code| {
                email == "n@e.com"
                    && *amount_kobo == 1_200_000
                    && metadata["transactionType"] == "Healthy Elders Club"
                    && metadata["paymentInformation"]["totalAmountToBePaid"] == 12000
                    && plan_code.as_deref() == Some("PLN_hec")
            })
            .times(1)
            .returning(|_, _, _, _| {
                Box::pin(async { Ok("https://checkout.paystack.com/hec".to_string()) })
            });

        let usecase = HealthyEldersClubUseCase::new(
            Arc::new(repo),
            Arc::new(gateway),
            "PLN_hec".to_string(),
        );

        let checkout = usecase.create(sample_model()).await.unwrap();

        assert!(checkout.subscription_id.starts_with("HEC-"));
        assert_eq!(checkout.paystack_link, "https://checkout.paystack.com/hec");
    }

    #[tokio::test]
    async fn one_time_payment_sends_no_plan_code() {
        let mut repo = MockHealthyEldersClubRepository::new();
        let mut gateway = MockPaymentGateway::new();

        gateway
            .expect_find_customer()
            .returning(|_| Box::pin(async { Ok(Some(existing_customer())) }));
        repo.expect_id_exists()
            .returning(|_| Box::pin(async { Ok(false) }));
        repo.expect_create().returning(|entity| {
            let id = entity.id.clone();
            Box::pin(async move { Ok(id) })
        });

        gateway
            .expect_initialize_transaction()
            .withf(|_, _, _, plan_code| plan_code.is_none())
            .times(1)
            .returning(|_, _, _, _| {
                Box::pin(async { Ok("https://checkout.paystack.com/hec".to_string()) })
            });

        let mut model = sample_model();
        model.payment_information.auto_renewal =
            crates::domain::value_objects::enums::auto_renewal::AutoRenewal::Off;

        let usecase = HealthyEldersClubUseCase::new(
            Arc::new(repo),
            Arc::new(gateway),
            "PLN_hec".to_string(),
        );

        usecase.create(model).await.unwrap();
    }
}
