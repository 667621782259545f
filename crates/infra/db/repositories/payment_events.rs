use anyhow::Result;
use async_trait::async_trait;
use diesel::{RunQueryDsl, insert_into, prelude::*};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        entities::payment_events::InsertPaymentEventEntity,
        repositories::payment_events::PaymentEventRepository,
    },
    infra::db::postgres::{postgres_connection::PgPoolSquad, schema::payment_events},
};

pub struct PaymentEventPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PaymentEventPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PaymentEventRepository for PaymentEventPostgres {
    async fn archive(&self, insert_entity: InsertPaymentEventEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let result = insert_into(payment_events::table)
            .values(&insert_entity)
            .returning(payment_events::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(result)
    }
}
