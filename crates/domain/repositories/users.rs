use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::users::{InsertUserEntity, UserEntity};

#[async_trait]
#[automock]
pub trait UserRepository {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<UserEntity>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserEntity>>;

    async fn create(&self, insert_entity: InsertUserEntity) -> Result<Uuid>;

    /// Returns the number of rows moved from Unverified to Verified (0 or 1).
    async fn mark_verified(&self, id: Uuid) -> Result<usize>;
}
