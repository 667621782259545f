use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::waitlist_entries::{InsertWaitlistEntryEntity, WaitlistEntryEntity},
        repositories::waitlist_entries::WaitlistEntryRepository,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::waitlist_entries},
};

pub struct WaitlistEntryPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl WaitlistEntryPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl WaitlistEntryRepository for WaitlistEntryPostgres {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<WaitlistEntryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = waitlist_entries::table
            .filter(
                waitlist_entries::email
                    .eq(email)
                    .or(waitlist_entries::phone_number.eq(phone_number)),
            )
            .select(WaitlistEntryEntity::as_select())
            .first::<WaitlistEntryEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn create(&self, insert_entity: InsertWaitlistEntryEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(waitlist_entries::table)
            .values(&insert_entity)
            .returning(waitlist_entries::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<WaitlistEntryEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let results = waitlist_entries::table
            .order(waitlist_entries::created_at.desc())
            .limit(limit)
            .select(WaitlistEntryEntity::as_select())
            .load::<WaitlistEntryEntity>(&mut conn)?;

        Ok(results)
    }
}
