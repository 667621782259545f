use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::automock;

use crate::domain::{
    entities::healthy_elders_clubs::{HealthyEldersClubEntity, InsertHealthyEldersClubEntity},
    repositories::ActivationOutcome,
};

#[async_trait]
#[automock]
pub trait HealthyEldersClubRepository {
    async fn id_exists(&self, id: &str) -> Result<bool>;

    async fn create(&self, insert_entity: InsertHealthyEldersClubEntity) -> Result<String>;

    async fn find_by_id(&self, id: &str) -> Result<Option<HealthyEldersClubEntity>>;

    /// Marks the record verified and sets the renewal date in one update,
    /// guarded on the record still being unverified.
    async fn verify(&self, id: &str, next_renewal: DateTime<Utc>) -> Result<ActivationOutcome>;

    async fn find_by_subscriber_email(&self, email: &str)
    -> Result<Vec<HealthyEldersClubEntity>>;

    async fn list_recent(&self, limit: i64) -> Result<Vec<HealthyEldersClubEntity>>;
}
