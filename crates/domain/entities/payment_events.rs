use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infra::db::postgres::schema::payment_events;

/// Append-only archive of raw webhook payloads, written before any field of
/// the event is trusted. Rows are never updated or deleted.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payment_events)]
pub struct PaymentEventEntity {
    pub id: Uuid,
    pub event_type: String,
    pub payload: serde_json::Value,
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payment_events)]
pub struct InsertPaymentEventEntity {
    pub event_type: String,
    pub payload: serde_json::Value,
}
