use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::partners::{InsertPartnerEntity, PartnerEntity};

#[async_trait]
#[automock]
pub trait PartnerRepository {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<PartnerEntity>>;

    async fn create(&self, insert_entity: InsertPartnerEntity) -> Result<Uuid>;

    async fn list_recent_by_kind(&self, kind: &str, limit: i64) -> Result<Vec<PartnerEntity>>;
}
