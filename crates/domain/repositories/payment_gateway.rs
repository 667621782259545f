use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::automock;

use crate::payments::paystack_client::{PaystackCustomer, TransactionTotals};

/// Payment-provider operations the use cases depend on. Implemented by
/// `PaystackClient`; mocked in tests.
#[async_trait]
#[automock]
pub trait PaymentGateway: Send + Sync {
    async fn find_customer(&self, email: &str) -> Result<Option<PaystackCustomer>>;

    async fn create_customer(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        phone: &str,
    ) -> Result<PaystackCustomer>;

    /// Initializes a transaction and returns the hosted checkout URL. The
    /// amount is in kobo; `plan_code` attaches a recurring plan.
    async fn initialize_transaction(
        &self,
        email: &str,
        amount_kobo: i64,
        metadata: serde_json::Value,
        plan_code: Option<String>,
    ) -> Result<String>;

    async fn fetch_transaction_totals(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<TransactionTotals>;

    /// Checks the HMAC-SHA512 hex digest of the raw body against the
    /// x-paystack-signature header value.
    fn verify_webhook_signature(&self, payload: &[u8], signature: &str) -> bool;
}
