use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::infra::db::postgres::schema::waitlist_entries;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable, Serialize)]
#[diesel(table_name = waitlist_entries)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntryEntity {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = waitlist_entries)]
pub struct InsertWaitlistEntryEntity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}
