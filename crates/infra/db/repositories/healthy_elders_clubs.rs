use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::{
    RunQueryDsl,
    dsl::sql,
    insert_into,
    prelude::*,
    sql_types::{Bool, Text},
    update,
};
use std::sync::Arc;

use crate::{
    domain::{
        entities::healthy_elders_clubs::{
            HealthyEldersClubEntity, HealthyEldersClubRow, InsertHealthyEldersClubEntity,
        },
        repositories::{ActivationOutcome, healthy_elders_clubs::HealthyEldersClubRepository},
        value_objects::enums::subscription_statuses::HealthyEldersStatus,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::healthy_elders_clubs},
};

pub struct HealthyEldersClubPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl HealthyEldersClubPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl HealthyEldersClubRepository for HealthyEldersClubPostgres {
    async fn id_exists(&self, id: &str) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = healthy_elders_clubs::table
            .filter(healthy_elders_clubs::id.eq(id))
            .select(healthy_elders_clubs::id)
            .first::<String>(&mut conn)
            .optional()?;

        Ok(found.is_some())
    }

    async fn create(&self, insert_entity: InsertHealthyEldersClubEntity) -> Result<String> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(healthy_elders_clubs::table)
            .values(&insert_entity)
            .returning(healthy_elders_clubs::id)
            .get_result::<String>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<HealthyEldersClubEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = healthy_elders_clubs::table
            .filter(healthy_elders_clubs::id.eq(id))
            .select(HealthyEldersClubRow::as_select())
            .first::<HealthyEldersClubRow>(&mut conn)
            .optional()?;

        row.map(HealthyEldersClubEntity::try_from).transpose()
    }

    async fn verify(&self, id: &str, next_renewal: DateTime<Utc>) -> Result<ActivationOutcome> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = update(healthy_elders_clubs::table)
            .filter(healthy_elders_clubs::id.eq(id))
            .filter(
                healthy_elders_clubs::status.eq(HealthyEldersStatus::Unverified.to_string()),
            )
            .set((
                healthy_elders_clubs::status.eq(HealthyEldersStatus::Verified.to_string()),
                healthy_elders_clubs::next_renewal.eq(Some(next_renewal)),
                healthy_elders_clubs::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        if affected > 0 {
            return Ok(ActivationOutcome::Activated);
        }

        let exists = healthy_elders_clubs::table
            .filter(healthy_elders_clubs::id.eq(id))
            .select(healthy_elders_clubs::id)
            .first::<String>(&mut conn)
            .optional()?
            .is_some();

        if exists {
            Ok(ActivationOutcome::AlreadyActive)
        } else {
            Ok(ActivationOutcome::NotFound)
        }
    }

    async fn find_by_subscriber_email(
        &self,
        email: &str,
    ) -> Result<Vec<HealthyEldersClubEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = healthy_elders_clubs::table
            .filter(
                sql::<Bool>("subscriber_details->>'email' = ")
                    .bind::<Text, _>(email.to_string()),
            )
            .order(healthy_elders_clubs::created_at.desc())
            .select(HealthyEldersClubRow::as_select())
            .load::<HealthyEldersClubRow>(&mut conn)?;

        rows.into_iter()
            .map(HealthyEldersClubEntity::try_from)
            .collect()
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<HealthyEldersClubEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = healthy_elders_clubs::table
            .order(healthy_elders_clubs::created_at.desc())
            .limit(limit)
            .select(HealthyEldersClubRow::as_select())
            .load::<HealthyEldersClubRow>(&mut conn)?;

        rows.into_iter()
            .map(HealthyEldersClubEntity::try_from)
            .collect()
    }
}
