use anyhow::Result;
use async_trait::async_trait;
use diesel::{
    RunQueryDsl,
    dsl::sql,
    insert_into,
    prelude::*,
    sql_types::{Bool, Text},
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::partners::{InsertPartnerEntity, PartnerEntity, PartnerRow},
        repositories::partners::PartnerRepository,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::partners},
};

pub struct PartnerPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PartnerPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PartnerRepository for PartnerPostgres {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<PartnerEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = partners::table
            .filter(
                sql::<Bool>("contact->>'email' = ")
                    .bind::<Text, _>(email.to_string())
                    .sql(" OR contact->>'phoneNumber' = ")
                    .bind::<Text, _>(phone_number.to_string()),
            )
            .select(PartnerRow::as_select())
            .first::<PartnerRow>(&mut conn)
            .optional()?;

        row.map(PartnerEntity::try_from).transpose()
    }

    async fn create(&self, insert_entity: InsertPartnerEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(partners::table)
            .values(&insert_entity)
            .returning(partners::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn list_recent_by_kind(&self, kind: &str, limit: i64) -> Result<Vec<PartnerEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = partners::table
            .filter(partners::kind.eq(kind))
            .order(partners::created_at.desc())
            .limit(limit)
            .select(PartnerRow::as_select())
            .load::<PartnerRow>(&mut conn)?;

        rows.into_iter().map(PartnerEntity::try_from).collect()
    }
}
