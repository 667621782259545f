use anyhow::Context;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    domain::value_objects::registrations::CaregiverPersonalInfo,
    infra::db::postgres::schema::caregivers,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = caregivers)]
pub struct CaregiverRow {
    pub id: Uuid,
    pub role: String,
    pub license_number: String,
    pub specialty: Option<String>,
    pub portrait_photo: String,
    pub personal_info: serde_json::Value,
    pub employment: serde_json::Value,
    pub education: serde_json::Value,
    pub location: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaregiverEntity {
    pub id: Uuid,
    pub role: String,
    pub license_number: String,
    pub specialty: Option<String>,
    pub portrait_photo: String,
    pub personal_info: CaregiverPersonalInfo,
    pub employment: serde_json::Value,
    pub education: serde_json::Value,
    pub location: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<CaregiverRow> for CaregiverEntity {
    type Error = anyhow::Error;

    fn try_from(row: CaregiverRow) -> Result<Self, Self::Error> {
        Ok(Self {
            personal_info: serde_json::from_value(row.personal_info)
                .context("invalid personal_info json")?,
            id: row.id,
            role: row.role,
            license_number: row.license_number,
            specialty: row.specialty,
            portrait_photo: row.portrait_photo,
            employment: row.employment,
            education: row.education,
            location: row.location,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = caregivers)]
pub struct InsertCaregiverEntity {
    pub role: String,
    pub license_number: String,
    pub specialty: Option<String>,
    pub portrait_photo: String,
    pub personal_info: serde_json::Value,
    pub employment: serde_json::Value,
    pub education: serde_json::Value,
    pub location: serde_json::Value,
}
