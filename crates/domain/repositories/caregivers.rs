use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::caregivers::{CaregiverEntity, InsertCaregiverEntity};

#[async_trait]
#[automock]
pub trait CaregiverRepository {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<CaregiverEntity>>;

    async fn create(&self, insert_entity: InsertCaregiverEntity) -> Result<Uuid>;

    async fn list_recent_by_role(&self, role: &str, limit: i64) -> Result<Vec<CaregiverEntity>>;
}
