use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::fmt::Display;

use crate::domain::value_objects::{
    farewell_cover::FarewellSubscriptionDetails,
    healthy_elders::HealthyEldersPaymentInformation,
};

/// Event types that activate a subscription. Everything else is acknowledged
/// and ignored so Paystack does not retry events we do not understand.
pub const ACTIONABLE_EVENTS: [&str; 3] =
    ["charge.success", "subscription.create", "subscription.renewal"];

#[derive(Debug, Clone, Deserialize)]
pub struct PaystackEvent {
    pub event: String,
    pub data: PaystackEventData,
}

impl PaystackEvent {
    pub fn is_actionable(&self) -> bool {
        ACTIONABLE_EVENTS.contains(&self.event.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaystackEventData {
    #[serde(default)]
    pub metadata: Option<PaystackWebhookMetadata>,
}

/// Which product a payment belongs to, round-tripped through Paystack
/// metadata as a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    FarewellCover,
    HealthyEldersClub,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::FarewellCover => "Farewell Cover",
            TransactionType::HealthyEldersClub => "Healthy Elders Club",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Farewell Cover" => Some(TransactionType::FarewellCover),
            "Healthy Elders Club" => Some(TransactionType::HealthyEldersClub),
            _ => None,
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detail blocks in webhook metadata arrive either as structured JSON or as a
/// JSON-encoded string, depending on which registration handler historically
/// produced them. Both shapes decode to the same typed value, so the webhook
/// processor only ever sees one schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MaybeEncoded<T> {
    Structured(T),
    Encoded(String),
}

impl<T: DeserializeOwned> MaybeEncoded<T> {
    pub fn decode(self) -> Result<T, serde_json::Error> {
        match self {
            MaybeEncoded::Structured(value) => Ok(value),
            MaybeEncoded::Encoded(text) => serde_json::from_str(&text),
        }
    }
}

/// Subscriber contact as round-tripped through payment metadata. Looser than
/// the registration form: only what the confirmation email needs is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscriber {
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

/// Metadata attached when the checkout link was requested and echoed back by
/// Paystack unchanged.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaystackWebhookMetadata {
    pub transaction_type: String,
    pub subscription_id: String,
    #[serde(default)]
    pub subscription_details: Option<MaybeEncoded<FarewellSubscriptionDetails>>,
    #[serde(default)]
    pub payment_information: Option<MaybeEncoded<HealthyEldersPaymentInformation>>,
    #[serde(default)]
    pub subscriber_details: Option<MaybeEncoded<WebhookSubscriber>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::{
        auto_renewal::AutoRenewal, farewell_plans::FarewellPlan, service_durations::ServiceDuration,
    };

    #[test]
    fn decodes_structured_farewell_metadata() {
        let payload = serde_json::json!({
            "event": "charge.success",
            "data": {
                "metadata": {
                    "transactionType": "Farewell Cover",
                    "subscriptionId": "SFC-AB12CD",
                    "subscriptionDetails": {
                        "farewellPlan": "Blue Diamond Plan",
                        "serviceDuration": "per annual",
                        "subscriptionAmount": 90000,
                        "autoRenewal": "off"
                    },
                    "subscriberDetails": {
                        "firstName": "Ada",
                        "email": "a@b.com"
                    }
                }
            }
        });

        let event: PaystackEvent = serde_json::from_value(payload).unwrap();
        assert!(event.is_actionable());

        let metadata = event.data.metadata.unwrap();
        assert_eq!(metadata.transaction_type, "Farewell Cover");
        assert_eq!(metadata.subscription_id, "SFC-AB12CD");

        let details = metadata.subscription_details.unwrap().decode().unwrap();
        assert_eq!(details.farewell_plan, FarewellPlan::BlueDiamond);
        assert_eq!(details.service_duration, ServiceDuration::Annual);
        assert_eq!(details.subscription_amount, 90000);

        // Partial subscriber blocks still decode: only email and first name
        // are required on the webhook side.
        let subscriber = metadata.subscriber_details.unwrap().decode().unwrap();
        assert_eq!(subscriber.email, "a@b.com");
        assert_eq!(subscriber.first_name, "Ada");
        assert!(subscriber.last_name.is_none());
    }

    #[test]
    fn decodes_string_encoded_healthy_elders_metadata() {
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
        });

        let event: PaystackEvent = serde_json::from_value(payload).unwrap();
        let metadata = event.data.metadata.unwrap();

        let payment = metadata.payment_information.unwrap().decode().unwrap();
        assert_eq!(payment.total_amount_to_be_paid, 12000);
        assert_eq!(payment.auto_renewal, AutoRenewal::On);

        let subscriber = metadata.subscriber_details.unwrap().decode().unwrap();
        assert_eq!(subscriber.email, "n@e.com");
    }

    #[test]
    fn unknown_event_is_not_actionable() {
        let payload = serde_json::json!({
            "event": "invoice.created",
            "data": {}
        });

        let event: PaystackEvent = serde_json::from_value(payload).unwrap();
        assert!(!event.is_actionable());
        assert!(event.data.metadata.is_none());
    }

    #[test]
    fn malformed_encoded_block_fails_to_decode() {
        let block: MaybeEncoded<WebhookSubscriber> =
            MaybeEncoded::Encoded("not json at all".to_string());
        assert!(block.decode().is_err());
    }
}
