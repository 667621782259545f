use std::sync::Arc;

use chrono::Utc;
use crates::domain::{
    entities::payment_events::InsertPaymentEventEntity,
    repositories::{
        ActivationOutcome, farewell_covers::FarewellCoverRepository,
        healthy_elders_clubs::HealthyEldersClubRepository, mailer::TransactionalMailer,
        payment_events::PaymentEventRepository, payment_gateway::PaymentGateway,
    },
    value_objects::paystack_webhook::{
        PaystackEvent, PaystackWebhookMetadata, TransactionType, WebhookSubscriber,
    },
};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::usecases::renewal::{farewell_cover_renewal_date, healthy_elders_renewal_date};

#[derive(Debug, Error)]
pub enum PaystackWebhookError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("invalid webhook payload: {0}")]
    InvalidPayload(String),
    #[error("subscription record not found: {0}")]
    SubscriptionNotFound(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PaystackWebhookError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            PaystackWebhookError::Unauthorized => StatusCode::UNAUTHORIZED,
            PaystackWebhookError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            PaystackWebhookError::SubscriptionNotFound(_) => StatusCode::NOT_FOUND,
            PaystackWebhookError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type WebhookResult<T> = std::result::Result<T, PaystackWebhookError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// A pending record was activated and the confirmation email attempted.
    Processed,
    /// Duplicate delivery: the record was already active, nothing re-sent.
    AlreadyProcessed,
    /// Event type we do not act on, acknowledged so Paystack stops retrying.
    Ignored,
}

pub struct PaystackWebhookUseCase<F, H, E, P, M>
where
    F: FarewellCoverRepository + Send + Sync + 'static,
    H: HealthyEldersClubRepository + Send + Sync + 'static,
    E: PaymentEventRepository + Send + Sync + 'static,
    P: PaymentGateway + Send + Sync + 'static,
    M: TransactionalMailer + Send + Sync + 'static,
{
    farewell_cover_repo: Arc<F>,
    healthy_elders_repo: Arc<H>,
    payment_event_repo: Arc<E>,
    payment_gateway: Arc<P>,
    mailer: Arc<M>,
    subscription_template: String,
}

impl<F, H, E, P, M> PaystackWebhookUseCase<F, H, E, P, M>
where
    F: FarewellCoverRepository + Send + Sync + 'static,
    H: HealthyEldersClubRepository + Send + Sync + 'static,
    E: PaymentEventRepository + Send + Sync + 'static,
    P: PaymentGateway + Send + Sync + 'static,
    M: TransactionalMailer + Send + Sync + 'static,
{
    pub fn new(
        farewell_cover_repo: Arc<F>,
        healthy_elders_repo: Arc<H>,
        payment_event_repo: Arc<E>,
        payment_gateway: Arc<P>,
        mailer: Arc<M>,
        subscription_template: String,
    ) -> Self {
        Self {
            farewell_cover_repo,
            healthy_elders_repo,
            payment_event_repo,
            payment_gateway,
            mailer,
            subscription_template,
        }
    }

    /// Full webhook pipeline over the raw request body: verify the signature,
    /// archive the payload, classify the event, then activate the referenced
    /// subscription record.
    pub async fn handle_event(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> WebhookResult<WebhookOutcome> {
        if !self
            .payment_gateway
            .verify_webhook_signature(payload, signature)
        {
            warn!(
                status = PaystackWebhookError::Unauthorized.status_code().as_u16(),
                "paystack_webhook: signature verification failed"
            );
            return Err(PaystackWebhookError::Unauthorized);
        }

        let raw: serde_json::Value = serde_json::from_slice(payload).map_err(|err| {
            warn!(error = %err, "paystack_webhook: body is not valid json");
            PaystackWebhookError::InvalidPayload("body is not valid JSON".to_string())
        })?;

        let event_type = raw
            .get("event")
            .and_then(|value| value.as_str())
            .unwrap_or("unknown")
            .to_string();

        // Archive before trusting anything else in the payload. This is the
        // audit trail, so a failed write fails the whole request.
        self.payment_event_repo
            .archive(InsertPaymentEventEntity {
                event_type: event_type.clone(),
                payload: raw.clone(),
            })
            .await
            .map_err(|err| {
                error!(
                    event_type,
                    db_error = ?err,
                    "paystack_webhook: failed to archive webhook payload"
                );
                PaystackWebhookError::Internal(err)
            })?;

        let event: PaystackEvent = serde_json::from_value(raw).map_err(|err| {
            warn!(error = %err, event_type, "paystack_webhook: malformed event payload");
            PaystackWebhookError::InvalidPayload("malformed event payload".to_string())
        })?;

        if !event.is_actionable() {
            info!(event_type, "paystack_webhook: event acknowledged and ignored");
            return Ok(WebhookOutcome::Ignored);
        }

        let metadata = event.data.metadata.ok_or_else(|| {
            let err =
                PaystackWebhookError::InvalidPayload("metadata is missing".to_string());
            warn!(
                event_type,
                status = err.status_code().as_u16(),
                "paystack_webhook: metadata missing from actionable event"
            );
            err
        })?;

        let transaction_type =
            TransactionType::from_str(&metadata.transaction_type).ok_or_else(|| {
                let err = PaystackWebhookError::InvalidPayload(format!(
                    "unknown transaction type: {}",
                    metadata.transaction_type
                ));
                warn!(
                    event_type,
                    transaction_type = %metadata.transaction_type,
                    status = err.status_code().as_u16(),
                    "paystack_webhook: unknown transaction type"
                );
                err
            })?;

        match transaction_type {
            TransactionType::FarewellCover => self.process_farewell_cover(metadata).await,
            TransactionType::HealthyEldersClub => self.process_healthy_elders(metadata).await,
        }
    }

    async fn process_farewell_cover(
        &self,
        metadata: PaystackWebhookMetadata,
    ) -> WebhookResult<WebhookOutcome> {
        let subscription_id = metadata.subscription_id;
        let details = metadata
            .subscription_details
            .ok_or_else(|| {
                PaystackWebhookError::InvalidPayload(
                    "subscription details are missing".to_string(),
                )
            })?
            .decode()
            .map_err(|err| {
                warn!(%subscription_id, error = %err, "paystack_webhook: bad subscription details");
                PaystackWebhookError::InvalidPayload("invalid subscription details".to_string())
            })?;
        let subscriber = decode_subscriber(metadata.subscriber_details, &subscription_id)?;

        let next_renewal = farewell_cover_renewal_date(Utc::now(), details.service_duration)
            .map_err(PaystackWebhookError::Internal)?;

        let outcome = self
            .farewell_cover_repo
            .activate(&subscription_id, next_renewal)
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    db_error = ?err,
                    "paystack_webhook: failed to activate farewell cover"
                );
                PaystackWebhookError::Internal(err)
            })?;

        match outcome {
            ActivationOutcome::NotFound => {
                warn!(
                    %subscription_id,
                    "paystack_webhook: farewell cover record not found"
                );
                Err(PaystackWebhookError::SubscriptionNotFound(subscription_id))
            }
            ActivationOutcome::AlreadyActive => {
                info!(
                    %subscription_id,
                    "paystack_webhook: farewell cover already active, skipping notification"
                );
                Ok(WebhookOutcome::AlreadyProcessed)
            }
            ActivationOutcome::Activated => {
                info!(
                    %subscription_id,
                    next_renewal = %next_renewal,
                    "paystack_webhook: farewell cover activated"
                );

                self.send_confirmation_email(
                    &subscriber,
                    details.farewell_plan.as_str(),
                    details.service_duration.as_str(),
                    details.subscription_amount,
                    details.auto_renewal.renewal_type(),
                    next_renewal,
                )
                .await;

                Ok(WebhookOutcome::Processed)
            }
        }
    }

    async fn process_healthy_elders(
        &self,
        metadata: PaystackWebhookMetadata,
    ) -> WebhookResult<WebhookOutcome> {
        let subscription_id = metadata.subscription_id;
        let payment = metadata
            .payment_information
            .ok_or_else(|| {
                PaystackWebhookError::InvalidPayload(
                    "payment information is missing".to_string(),
                )
            })?
            .decode()
            .map_err(|err| {
                warn!(%subscription_id, error = %err, "paystack_webhook: bad payment information");
                PaystackWebhookError::InvalidPayload("invalid payment information".to_string())
            })?;
        let subscriber = decode_subscriber(metadata.subscriber_details, &subscription_id)?;

        let next_renewal =
            healthy_elders_renewal_date(Utc::now()).map_err(PaystackWebhookError::Internal)?;

        let outcome = self
            .healthy_elders_repo
            .verify(&subscription_id, next_renewal)
            .await
            .map_err(|err| {
                error!(
                    %subscription_id,
                    db_error = ?err,
                    "paystack_webhook: failed to verify healthy elders record"
                );
                PaystackWebhookError::Internal(err)
            })?;

        match outcome {
            ActivationOutcome::NotFound => {
                warn!(
                    %subscription_id,
                    "paystack_webhook: healthy elders record not found"
                );
                Err(PaystackWebhookError::SubscriptionNotFound(subscription_id))
            }
            ActivationOutcome::AlreadyActive => {
                info!(
                    %subscription_id,
                    "paystack_webhook: healthy elders record already verified, skipping notification"
                );
                Ok(WebhookOutcome::AlreadyProcessed)
            }
            ActivationOutcome::Activated => {
                info!(
                    %subscription_id,
                    next_renewal = %next_renewal,
                    "paystack_webhook: healthy elders record verified"
                );

                self.send_confirmation_email(
                    &subscriber,
                    "Annual Healthy Elders Club Plan",
                    "Annual",
                    payment.total_amount_to_be_paid,
                    payment.auto_renewal.renewal_type(),
                    next_renewal,
                )
                .await;

                Ok(WebhookOutcome::Processed)
            }
        }
    }

    /// Best-effort: the subscription is already activated, so a mail failure
    /// is logged and swallowed.
    async fn send_confirmation_email(
        &self,
        subscriber: &WebhookSubscriber,
        plan_type: &str,
        payment_frequency: &str,
        amount: i32,
        renewal_type: &str,
        next_renewal: chrono::DateTime<Utc>,
    ) {
        let merge_info = serde_json::json!({
            "firstName": subscriber.first_name,
            "solacePlanType": plan_type,
            "paymentFrequency": payment_frequency,
            "subscriptionAmount": format!("{:.2}", f64::from(amount)),
            "expiryDate": next_renewal.format("%Y-%m-%d").to_string(),
            "renewalType": renewal_type,
        });

        if let Err(err) = self
            .mailer
            .send_template(
                &self.subscription_template,
                &subscriber.email,
                &subscriber.first_name,
                "✉️ Subscription Confirmed!",
                merge_info,
            )
            .await
        {
            warn!(
                email = %subscriber.email,
                error = ?err,
                "paystack_webhook: confirmation email failed"
            );
        }
    }
}

fn decode_subscriber(
    block: Option<
        crates::domain::value_objects::paystack_webhook::MaybeEncoded<WebhookSubscriber>,
    >,
    subscription_id: &str,
) -> WebhookResult<WebhookSubscriber> {
    block
        .ok_or_else(|| {
            PaystackWebhookError::InvalidPayload("subscriber details are missing".to_string())
        })?
        .decode()
        .map_err(|err| {
            warn!(subscription_id, error = %err, "paystack_webhook: bad subscriber details");
            PaystackWebhookError::InvalidPayload("invalid subscriber details".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::Duration;
    use crates::domain::repositories::{
        farewell_covers::MockFarewellCoverRepository,
        healthy_elders_clubs::MockHealthyEldersClubRepository, mailer::MockTransactionalMailer,
        payment_events::MockPaymentEventRepository, payment_gateway::MockPaymentGateway,
    };
    use mockall::predicate::{always, eq};

    type TestUseCase = PaystackWebhookUseCase<
        MockFarewellCoverRepository,
        MockHealthyEldersClubRepository,
        MockPaymentEventRepository,
        MockPaymentGateway,
        MockTransactionalMailer,
    >;

    struct Mocks {
        farewell: MockFarewellCoverRepository,
        healthy: MockHealthyEldersClubRepository,
        events: MockPaymentEventRepository,
        gateway: MockPaymentGateway,
        mailer: MockTransactionalMailer,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                farewell: MockFarewellCoverRepository::new(),
                healthy: MockHealthyEldersClubRepository::new(),
                events: MockPaymentEventRepository::new(),
                gateway: MockPaymentGateway::new(),
                mailer: MockTransactionalMailer::new(),
            }
        }

        fn accept_signature(&mut self) {
            self.gateway
                .expect_verify_webhook_signature()
                .returning(|_, _| true);
        }

        fn archive_succeeds(&mut self) {
            self.events
                .expect_archive()
                .times(1)
                .returning(|_| Box::pin(async { Ok(uuid::Uuid::new_v4()) }));
        }

        fn into_usecase(self) -> TestUseCase {
            PaystackWebhookUseCase::new(
                Arc::new(self.farewell),
                Arc::new(self.healthy),
                Arc::new(self.events),
                Arc::new(self.gateway),
                Arc::new(self.mailer),
                "subscription-template-key".to_string(),
            )
        }
    }

    // The detail blocks here carry exactly what the gateway echoes back for a
    // real annual Blue Diamond charge, partial subscriber block included.
    fn farewell_charge_success_payload() -> Vec<u8> {
        serde_json::json!({
            "event": "charge.success",
            "data": {
                "metadata": {
                    "transactionType": "Farewell Cover",
                    "subscriptionId": "SFC-AB12CD",
                    "subscriptionDetails": {
                        "serviceDuration": "per annual",
                        "subscriptionAmount": 90000,
                        "farewellPlan": "Blue Diamond Plan"
                    },
                    "subscriberDetails": {
                        "email": "a@b.com",
                        "firstName": "Ada"
                    }
                }
            }
        })
        .to_string()
        .into_bytes()
    }

    #[tokio::test]
    async fn charge_success_activates_record_and_sends_email() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks.archive_succeeds();

        let before = Utc::now();
        mocks
            .farewell
            .expect_activate()
            .with(eq("SFC-AB12CD"), always())
            .times(1)
            .returning(move |_, next_renewal| {
                // now + 12 months, definitely more than 360 days out
                assert!(next_renewal > before + Duration::days(360));
                Box::pin(async { Ok(ActivationOutcome::Activated) })
            });

        mocks
            .mailer
            .expect_send_template()
            .withf(|template, to, name, subject, merge_info| {
                template == "subscription-template-key"
                    && to == "a@b.com"
                    && name == "Ada"
                    && subject == "✉️ Subscription Confirmed!"
                    && merge_info["solacePlanType"] == "Blue Diamond Plan"
                    && merge_info["paymentFrequency"] == "per annual"
                    && merge_info["subscriptionAmount"] == "90000.00"
                    && merge_info["renewalType"] == "One Time Payment"
            })
            .times(1)
            .returning(|_, _, _, _, _| Box::pin(async { Ok(()) }));

        let usecase = mocks.into_usecase();
        let outcome = usecase
            .handle_event(&farewell_charge_success_payload(), "deadbeef")
            .await
            .unwrap();

        assert_eq!(outcome, WebhookOutcome::Processed);
    }

    #[tokio::test]
    async fn bad_signature_is_rejected_before_any_processing() {
        let mut mocks = Mocks::new();
        mocks
            .gateway
            .expect_verify_webhook_signature()
            .returning(|_, _| false);
        // No archive/activate/mail expectations: any call would panic.

        let usecase = mocks.into_usecase();
        let err = usecase
            .handle_event(&farewell_charge_success_payload(), "deadbeef")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_event_type_is_archived_then_ignored() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks.archive_succeeds();

        let payload = serde_json::json!({
            "event": "invoice.created",
            "data": {}
        })
        .to_string()
        .into_bytes();

        let usecase = mocks.into_usecase();
        let outcome = usecase.handle_event(&payload, "deadbeef").await.unwrap();

        assert_eq!(outcome, WebhookOutcome::Ignored);
    }

    #[tokio::test]
    async fn missing_metadata_is_a_client_error() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks.archive_succeeds();

        let payload = serde_json::json!({
            "event": "charge.success",
            "data": {}
        })
        .to_string()
        .into_bytes();

        let usecase = mocks.into_usecase();
        let err = usecase.handle_event(&payload, "deadbeef").await.unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_transaction_type_is_a_client_error() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks.archive_succeeds();

        let payload = serde_json::json!({
            "event": "charge.success",
            "data": {
                "metadata": {
                    "transactionType": "Car Insurance",
                    "subscriptionId": "XYZ-000000"
                }
            }
        })
        .to_string()
        .into_bytes();

        let usecase = mocks.into_usecase();
        let err = usecase.handle_event(&payload, "deadbeef").await.unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_record_yields_not_found() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks.archive_succeeds();

        mocks
            .farewell
            .expect_activate()
            .returning(|_, _| Box::pin(async { Ok(ActivationOutcome::NotFound) }));

        let usecase = mocks.into_usecase();
        let err = usecase
            .handle_event(&farewell_charge_success_payload(), "deadbeef")
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_delivery_skips_the_confirmation_email() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks.archive_succeeds();

        mocks
            .farewell
            .expect_activate()
            .returning(|_, _| Box::pin(async { Ok(ActivationOutcome::AlreadyActive) }));
        // Mailer has no expectations: a send would fail the test.

        let usecase = mocks.into_usecase();
        let outcome = usecase
            .handle_event(&farewell_charge_success_payload(), "deadbeef")
            .await
            .unwrap();

        assert_eq!(outcome, WebhookOutcome::AlreadyProcessed);
    }

    #[tokio::test]
    async fn email_failure_does_not_fail_activation() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks.archive_succeeds();

        mocks
            .farewell
            .expect_activate()
            .returning(|_, _| Box::pin(async { Ok(ActivationOutcome::Activated) }));
        mocks
            .mailer
            .expect_send_template()
            .returning(|_, _, _, _, _| Box::pin(async { Err(anyhow!("smtp is down")) }));

        let usecase = mocks.into_usecase();
        let outcome = usecase
            .handle_event(&farewell_charge_success_payload(), "deadbeef")
            .await
            .unwrap();

        assert_eq!(outcome, WebhookOutcome::Processed);
    }

    #[tokio::test]
    async fn archive_failure_fails_the_request() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks
            .events
            .expect_archive()
            .returning(|_| Box::pin(async { Err(anyhow!("db unreachable")) }));

        let usecase = mocks.into_usecase();
        let err = usecase
            .handle_event(&farewell_charge_success_payload(), "deadbeef")
            .await
            .unwrap_err();

        assert_eq!(
            err.status_code(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn healthy_elders_with_string_encoded_metadata_is_verified() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks.archive_succeeds();

        let before = Utc::now();
        mocks
            .healthy
            .expect_verify()
            .with(eq("HEC-9XY0ZT"), always())
            .times(1)
            .returning(move |_, next_renewal| {
                let days = (next_renewal - before).num_days();
                assert!((364..=365).contains(&days));
                Box::pin(async { Ok(ActivationOutcome::Activated) })
            });

        mocks
            .mailer
            .expect_send_template()
            .withf(|_, to, _, _, merge_info| {
                to == "n@e.com"
                    && merge_info["solacePlanType"] == "Annual Healthy Elders Club Plan"
                    && merge_info["paymentFrequency"] == "Annual"
                    && merge_info["subscriptionAmount"] == "12000.00"
                    && merge_info["renewalType"] == "Auto Renew"
            })
            .times(1)
            .returning(|_, _, _, _, _| Box::pin(async { Ok(()) }));

        let payload = serde_json::json!({
            "event": "subscription.create",
            "data": {
                "metadata": {
                    "transactionType": "Healthy Elders Club",
                    "subscriptionId": "HEC-9XY0ZT",
                    "paymentInformation":
                        "{\"membershipFee\":1000,\"totalAmountToBePaid\":12000,\"autoRenewal\":\"on\",\"paymentMethod\":\"card\"}",
                    "subscriberDetails":
                        "{\"firstName\":\"Ngozi\",\"lastName\":\"Eze\",\"email\":\"n@e.com\",\"phoneNumber\":\"08098765432\"}"
                }
            }
        })
        .to_string()
        .into_bytes();

        let usecase = mocks.into_usecase();
        let outcome = usecase.handle_event(&payload, "deadbeef").await.unwrap();

        assert_eq!(outcome, WebhookOutcome::Processed);
    }

    #[tokio::test]
    async fn invalid_service_duration_fails_without_record_mutation() {
        let mut mocks = Mocks::new();
        mocks.accept_signature();
        mocks.archive_succeeds();
        // No activate expectation: the bad frequency must fail first.

        let payload = serde_json::json!({
            "event": "charge.success",
            "data": {
                "metadata": {
                    "transactionType": "Farewell Cover",
                    "subscriptionId": "SFC-AB12CD",
                    "subscriptionDetails": {
                        "farewellPlan": "Blue Diamond Plan",
                        "serviceDuration": "per weekly",
                        "subscriptionAmount": 90000,
                        "autoRenewal": "off"
                    },
                    "subscriberDetails": {
                        "firstName": "Ada",
                        "lastName": "Obi",
                        "email": "a@b.com",
                        "phoneNumber": "08012345678"
                    }
                }
            }
        })
        .to_string()
        .into_bytes();

        let usecase = mocks.into_usecase();
        let err = usecase.handle_event(&payload, "deadbeef").await.unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }
}
