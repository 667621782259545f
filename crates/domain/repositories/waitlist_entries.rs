use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::waitlist_entries::{InsertWaitlistEntryEntity, WaitlistEntryEntity};

#[async_trait]
#[automock]
pub trait WaitlistEntryRepository {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<WaitlistEntryEntity>>;

    async fn create(&self, insert_entity: InsertWaitlistEntryEntity) -> Result<Uuid>;

    async fn list_recent(&self, limit: i64) -> Result<Vec<WaitlistEntryEntity>>;
}
