use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::super_admins::{InsertSuperAdminEntity, SuperAdminEntity};

#[async_trait]
#[automock]
pub trait SuperAdminRepository {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<SuperAdminEntity>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<SuperAdminEntity>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SuperAdminEntity>>;

    async fn create(&self, insert_entity: InsertSuperAdminEntity) -> Result<Uuid>;
}
