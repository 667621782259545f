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
        entities::caregivers::{CaregiverEntity, CaregiverRow, InsertCaregiverEntity},
        repositories::caregivers::CaregiverRepository,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::caregivers},
};

pub struct CaregiverPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl CaregiverPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl CaregiverRepository for CaregiverPostgres {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<CaregiverEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let row = caregivers::table
            .filter(
                sql::<Bool>("personal_info->>'email' = ")
                    .bind::<Text, _>(email.to_string())
                    .sql(" OR personal_info->>'phoneNumber' = ")
                    .bind::<Text, _>(phone_number.to_string()),
            )
            .select(CaregiverRow::as_select())
            .first::<CaregiverRow>(&mut conn)
            .optional()?;

        row.map(CaregiverEntity::try_from).transpose()
    }

    async fn create(&self, insert_entity: InsertCaregiverEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(caregivers::table)
            .values(&insert_entity)
            .returning(caregivers::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }

    async fn list_recent_by_role(&self, role: &str, limit: i64) -> Result<Vec<CaregiverEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let rows = caregivers::table
            .filter(caregivers::role.eq(role))
            .order(caregivers::created_at.desc())
            .limit(limit)
            .select(CaregiverRow::as_select())
            .load::<CaregiverRow>(&mut conn)?;

        rows.into_iter().map(CaregiverEntity::try_from).collect()
    }
}
