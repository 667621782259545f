use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use hmac::{Hmac, Mac};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use sha2::Sha512;
use tracing::error;

use crate::domain::repositories::payment_gateway::PaymentGateway;

type HmacSha512 = Hmac<Sha512>;

const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

/// Minimal Paystack client built on reqwest.
pub struct PaystackClient {
    http: reqwest::Client,
    secret_key: String,
}

/// Standard Paystack response envelope: `status` reports business success,
/// independent of the HTTP status code.
#[derive(Debug, Deserialize)]
struct PaystackEnvelope<T> {
    status: bool,
    message: Option<String>,
    data: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaystackCustomer {
    pub customer_code: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransactionInitData {
    authorization_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyVolume {
    pub currency: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionTotals {
    pub total_transactions: i64,
    #[serde(default)]
    pub total_volume_by_currency: Vec<CurrencyVolume>,
}

impl TransactionTotals {
    /// Total volume in the given currency, zero when Paystack reports none.
    pub fn volume_for(&self, currency: &str) -> i64 {
        self.total_volume_by_currency
            .iter()
            .find(|entry| entry.currency == currency)
            .map(|entry| entry.amount)
            .unwrap_or(0)
    }
}

#[derive(Debug, Serialize)]
struct InitializeTransactionBody<'a> {
    email: &'a str,
    amount: i64,
    metadata: &'a serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    plan: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CreateCustomerBody<'a> {
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    phone: &'a str,
}

impl PaystackClient {
    pub fn new(secret_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(OUTBOUND_TIMEOUT)
            .build()
            .context("failed to build Paystack http client")?;

        Ok(Self { http, secret_key })
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        error!(
            status = %status,
            response_body = %body,
            context = %context,
            "paystack api request failed"
        );

        anyhow::bail!("Paystack API request failed: {} (status {})", context, status);
    }

    fn unwrap_envelope<T>(envelope: PaystackEnvelope<T>, context: &str) -> Result<T> {
        if !envelope.status {
            anyhow::bail!(
                "Paystack reported failure: {} ({})",
                context,
                envelope.message.unwrap_or_else(|| "no message".to_string())
            );
        }

        envelope
            .data
            .with_context(|| format!("Paystack response data is missing: {}", context))
    }
}

#[async_trait]
impl PaymentGateway for PaystackClient {
    /// Looks a customer up by email. Paystack answers 404 with a falsy
    /// envelope for unknown customers; both map to `None`.
    async fn find_customer(&self, email: &str) -> Result<Option<PaystackCustomer>> {
        // https://paystack.com/docs/api/customer/#fetch
        let resp = self
            .http
            .get(format!("https://api.paystack.co/customer/{}", email))
            .header(AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .send()
            .await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = Self::ensure_success(resp, "fetch customer").await?;

        let envelope: PaystackEnvelope<PaystackCustomer> = resp.json().await?;
        if !envelope.status {
            return Ok(None);
        }

        Ok(envelope.data)
    }

    async fn create_customer(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
    ) -> Result<PaystackCustomer> {
        // https://paystack.com/docs/api/customer/#create
        let body = CreateCustomerBody {
            email,
            first_name,
            last_name,
            phone,
        };

        let resp = self
            .http
            .post("https://api.paystack.co/customer")
            .header(AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "create customer").await?;

        let envelope: PaystackEnvelope<PaystackCustomer> = resp.json().await?;
        Self::unwrap_envelope(envelope, "create customer")
    }

    async fn initialize_transaction(
        &self,
        email: &str,
        amount_kobo: i64,
        metadata: serde_json::Value,
        plan_code: Option<String>,
    ) -> Result<String> {
        // https://paystack.com/docs/api/transaction/#initialize
        let body = InitializeTransactionBody {
            email,
            amount: amount_kobo,
            metadata: &metadata,
            plan: plan_code.as_deref(),
        };

        let resp = self
            .http
            .post("https://api.paystack.co/transaction/initialize")
            .header(AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "initialize transaction").await?;

        let envelope: PaystackEnvelope<TransactionInitData> = resp.json().await?;
        let data = Self::unwrap_envelope(envelope, "initialize transaction")?;

        Ok(data.authorization_url)
    }

    async fn fetch_transaction_totals(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<TransactionTotals> {
        // https://paystack.com/docs/api/transaction/#totals
        let resp = self
            .http
            .get("https://api.paystack.co/transaction/totals")
            .header(AUTHORIZATION, format!("Bearer {}", self.secret_key))
            .query(&[
                ("from", from.format("%Y-%m-%d").to_string()),
                ("to", to.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "fetch transaction totals").await?;

        let envelope: PaystackEnvelope<TransactionTotals> = resp.json().await?;
        Self::unwrap_envelope(envelope, "fetch transaction totals")
    }

    /// Paystack signs webhooks with HMAC-SHA512 over the raw body, hex-encoded
    /// in the x-paystack-signature header.
    /// https://paystack.com/docs/payments/webhooks/#signature-validation
    fn verify_webhook_signature(&self, payload: &[u8], signature: &str) -> bool {
        let Ok(provided) = hex::decode(signature) else {
            return false;
        };

        let Ok(mut mac) = HmacSha512::new_from_slice(self.secret_key.as_bytes()) else {
            return false;
        };
        mac.update(payload);

        // verify_slice is constant-time.
        mac.verify_slice(&provided).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(payload: &[u8], secret: &str) -> String {
        let mut mac = HmacSha512::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    fn test_client() -> PaystackClient {
        PaystackClient::new("sk_test_secret".to_string()).unwrap()
    }

    #[test]
    fn accepts_valid_signature() {
        let client = test_client();
        let payload = br#"{"event":"charge.success","data":{}}"#;
        let signature = sign(payload, "sk_test_secret");

        assert!(client.verify_webhook_signature(payload, &signature));
    }

    #[test]
    fn rejects_signature_from_wrong_secret() {
        let client = test_client();
        let payload = br#"{"event":"charge.success","data":{}}"#;
        let signature = sign(payload, "some_other_secret");

        assert!(!client.verify_webhook_signature(payload, &signature));
    }

    #[test]
    fn rejects_single_byte_mutation_of_body() {
        let client = test_client();
        let payload = br#"{"event":"charge.success","data":{}}"#.to_vec();
        let signature = sign(&payload, "sk_test_secret");

        let mut tampered = payload.clone();
        tampered[10] ^= 0x01;

        assert!(client.verify_webhook_signature(&payload, &signature));
        assert!(!client.verify_webhook_signature(&tampered, &signature));
    }

    #[test]
    fn rejects_non_hex_signature() {
        let client = test_client();
        assert!(!client.verify_webhook_signature(b"{}", "not hex at all"));
    }

    #[test]
    fn totals_volume_lookup_defaults_to_zero() {
        let totals = TransactionTotals {
            total_transactions: 4,
            total_volume_by_currency: vec![CurrencyVolume {
                currency: "NGN".to_string(),
                amount: 360_000,
            }],
        };

        assert_eq!(totals.volume_for("NGN"), 360_000);
        assert_eq!(totals.volume_for("USD"), 0);
    }

    // Manual check: export PAYSTACK_SECRET_KEY, then run:
    // cargo test -p crates paystack_client::tests::unknown_customer_is_none -- --ignored --nocapture
    #[tokio::test]
    #[ignore = "hits the real Paystack API and needs credentials"]
    async fn unknown_customer_is_none() -> Result<()> {
        dotenvy::dotenv().ok();

        let client = PaystackClient::new(std::env::var("PAYSTACK_SECRET_KEY")?)?;
        let customer = client
            .find_customer("no-such-subscriber@solace.com.ng")
            .await?;

        assert!(customer.is_none());
        Ok(())
    }
}
