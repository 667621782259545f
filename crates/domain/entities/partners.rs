use anyhow::Context;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    domain::value_objects::registrations::PartnerContact, infra::db::postgres::schema::partners,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = partners)]
pub struct PartnerRow {
    pub id: Uuid,
    pub kind: String,
    pub organization_name: String,
    pub contact: serde_json::Value,
    pub details: serde_json::Value,
    pub documents: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerEntity {
    pub id: Uuid,
    pub kind: String,
    pub organization_name: String,
    pub contact: PartnerContact,
    pub details: serde_json::Value,
    /// Hosted proof-document URLs keyed by the form field they came from.
    pub documents: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<PartnerRow> for PartnerEntity {
    type Error = anyhow::Error;

    fn try_from(row: PartnerRow) -> Result<Self, Self::Error> {
        Ok(Self {
            contact: serde_json::from_value(row.contact).context("invalid contact json")?,
            id: row.id,
            kind: row.kind,
            organization_name: row.organization_name,
            details: row.details,
            documents: row.documents,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = partners)]
pub struct InsertPartnerEntity {
    pub kind: String,
    pub organization_name: String,
    pub contact: serde_json::Value,
    pub details: serde_json::Value,
    pub documents: serde_json::Value,
}
