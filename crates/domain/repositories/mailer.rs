use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// Templated transactional email. Callers decide whether a send failure is
/// fatal; for confirmation/notification mail it never is.
#[async_trait]
#[automock]
pub trait TransactionalMailer: Send + Sync {
    async fn send_template(
        &self,
        template_key: &str,
        to_address: &str,
        to_name: &str,
        subject: &str,
        merge_info: serde_json::Value,
    ) -> Result<()>;
}
