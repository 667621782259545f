use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::payment_events::InsertPaymentEventEntity;

#[async_trait]
#[automock]
pub trait PaymentEventRepository {
    /// Archives one raw webhook payload. A failure here fails the whole
    /// webhook request: the audit trail is not best-effort.
    async fn archive(&self, insert_entity: InsertPaymentEventEntity) -> Result<Uuid>;
}
