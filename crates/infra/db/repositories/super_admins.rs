use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::super_admins::{InsertSuperAdminEntity, SuperAdminEntity},
        repositories::super_admins::SuperAdminRepository,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::super_admins},
};

pub struct SuperAdminPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl SuperAdminPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SuperAdminRepository for SuperAdminPostgres {
    async fn find_by_email_or_phone(
        &self,
        email: &str,
        phone_number: &str,
    ) -> Result<Option<SuperAdminEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = super_admins::table
            .filter(
                super_admins::email
                    .eq(email)
                    .or(super_admins::phone_number.eq(phone_number)),
            )
            .select(SuperAdminEntity::as_select())
            .first::<SuperAdminEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<SuperAdminEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = super_admins::table
            .filter(super_admins::email.eq(email))
            .select(SuperAdminEntity::as_select())
            .first::<SuperAdminEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SuperAdminEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = super_admins::table
            .filter(super_admins::id.eq(id))
            .select(SuperAdminEntity::as_select())
            .first::<SuperAdminEntity>(&mut conn)
            .optional()?;

        Ok(result)
    }

    async fn create(&self, insert_entity: InsertSuperAdminEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(super_admins::table)
            .values(&insert_entity)
            .returning(super_admins::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }
}
