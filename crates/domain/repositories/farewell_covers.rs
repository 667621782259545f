use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;

use crate::domain::{
    entities::farewell_covers::{FarewellCoverEntity, InsertFarewellCoverEntity},
    repositories::ActivationOutcome,
};

#[async_trait]
#[automock]
pub trait FarewellCoverRepository {
    async fn id_exists(&self, id: &str) -> Result<bool>;

    async fn create(&self, insert_entity: InsertFarewellCoverEntity) -> Result<String>;

    async fn find_by_id(&self, id: &str) -> Result<Option<FarewellCoverEntity>>;

    /// Transitions the record to active and sets the renewal date in one
    /// update, guarded on the record still being inactive.
    async fn activate(
        &self,
        id: &str,
        next_renewal: DateTime<Utc>,
    ) -> Result<ActivationOutcome>;

    async fn find_by_subscriber_email(&self, email: &str) -> Result<Vec<FarewellCoverEntity>>;

    async fn list_recent(&self, limit: i64) -> Result<Vec<FarewellCoverEntity>>;
}
