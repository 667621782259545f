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
        entities::farewell_covers::{
            FarewellCoverEntity, FarewellCoverRow, InsertFarewellCoverEntity,
        },
        repositories::{ActivationOutcome, farewell_covers::FarewellCoverRepository},
        value_objects::enums::subscription_statuses::FarewellCoverStatus,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::farewell_covers},
};

pub struct FarewellCoverPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl FarewellCoverPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl FarewellCoverRepository for FarewellCoverPostgres {
    async fn id_exists(&self, id: &str) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = farewell_covers::table
            .filter(farewell_covers::id.eq(id))
            .select(farewell_covers::id)
            .first::<String>(&mut conn)
            .optional()?;

        Ok(found.is_some())
    }

    async fn create(&self, insert_entity: InsertFarewellCoverEntity) -> Result<String> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(farewell_covers::table)
            .values(&insert_entity)
            .returning(farewell_covers::id)
            .get_result::<String>(&mut conn)?;

        Ok(result)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<FarewellCoverEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = farewell_covers::table
            .filter(farewell_covers::id.eq(id))
            .select(FarewellCoverRow::as_select())
            .first::<FarewellCoverRow>(&mut conn)
            .optional()?;

        row.map(FarewellCoverEntity::try_from).transpose()
    }

    async fn activate(
        &self,
        id: &str,
        next_renewal: DateTime<Utc>,
    ) -> Result<ActivationOutcome> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        // Single guarded update: status and renewal date move together, and
        // only the first delivery observes an affected row.
        let affected = update(farewell_covers::table)
            .filter(farewell_covers::id.eq(id))
            .filter(farewell_covers::status.eq(FarewellCoverStatus::Inactive.to_string()))
            .set((
                farewell_covers::status.eq(FarewellCoverStatus::Active.to_string()),
                farewell_covers::next_renewal.eq(Some(next_renewal)),
                farewell_covers::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)?;

        if affected > 0 {
            return Ok(ActivationOutcome::Activated);
        }

        let exists = farewell_covers::table
            .filter(farewell_covers::id.eq(id))
            .select(farewell_covers::id)
            .first::<String>(&mut conn)
            .optional()?
            .is_some();

        if exists {
            Ok(ActivationOutcome::AlreadyActive)
        } else {
            Ok(ActivationOutcome::NotFound)
        }
    }

    async fn find_by_subscriber_email(&self, email: &str) -> Result<Vec<FarewellCoverEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = farewell_covers::table
            .filter(
                sql::<Bool>("subscriber_details->>'email' = ")
                    .bind::<Text, _>(email.to_string()),
            )
            .order(farewell_covers::created_at.desc())
            .select(FarewellCoverRow::as_select())
            .load::<FarewellCoverRow>(&mut conn)?;

        rows.into_iter()
            .map(FarewellCoverEntity::try_from)
            .collect()
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<FarewellCoverEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = farewell_covers::table
            .order(farewell_covers::created_at.desc())
            .limit(limit)
            .select(FarewellCoverRow::as_select())
            .load::<FarewellCoverRow>(&mut conn)?;

        rows.into_iter()
            .map(FarewellCoverEntity::try_from)
            .collect()
    }
}
