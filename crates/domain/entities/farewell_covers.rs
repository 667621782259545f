use anyhow::Context;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use crate::{
    domain::value_objects::farewell_cover::{
        BeneficiaryHealthDetails, BeneficiaryPersonalDetails, SubscriberDetails,
    },
    infra::db::postgres::schema::farewell_covers,
};

/// Raw row used for Diesel queries. The nested person blocks stay as JSON and
/// are parsed into their typed value objects.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = farewell_covers)]
pub struct FarewellCoverRow {
    pub id: String,
    pub relationship_with_beneficiary: String,
    pub subscriber_details: serde_json::Value,
    pub beneficiary_personal_details: serde_json::Value,
    pub beneficiary_health_details: serde_json::Value,
    pub farewell_plan: String,
    pub service_duration: String,
    pub subscription_amount: i32,
    pub auto_renewal: String,
    pub status: String,
    pub next_renewal: Option<DateTime<Utc>>,
    pub referral_code: Option<String>,
    pub referrer_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FarewellCoverEntity {
    pub id: String,
    pub relationship_with_beneficiary: String,
    pub subscriber_details: SubscriberDetails,
    pub beneficiary_personal_details: BeneficiaryPersonalDetails,
    pub beneficiary_health_details: BeneficiaryHealthDetails,
    pub farewell_plan: String,
    pub service_duration: String,
    pub subscription_amount: i32,
    pub auto_renewal: String,
    pub status: String,
    pub next_renewal: Option<DateTime<Utc>>,
    pub referral_code: Option<String>,
    pub referrer_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<FarewellCoverRow> for FarewellCoverEntity {
    type Error = anyhow::Error;

    fn try_from(row: FarewellCoverRow) -> Result<Self, Self::Error> {
        Ok(Self {
            subscriber_details: serde_json::from_value(row.subscriber_details)
                .context("invalid subscriber_details json")?,
            beneficiary_personal_details: serde_json::from_value(
                row.beneficiary_personal_details,
            )
            .context("invalid beneficiary_personal_details json")?,
            beneficiary_health_details: serde_json::from_value(row.beneficiary_health_details)
                .context("invalid beneficiary_health_details json")?,
            id: row.id,
            relationship_with_beneficiary: row.relationship_with_beneficiary,
            farewell_plan: row.farewell_plan,
            service_duration: row.service_duration,
            subscription_amount: row.subscription_amount,
            auto_renewal: row.auto_renewal,
            status: row.status,
            next_renewal: row.next_renewal,
            referral_code: row.referral_code,
            referrer_name: row.referrer_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = farewell_covers)]
pub struct InsertFarewellCoverEntity {
    pub id: String,
    pub relationship_with_beneficiary: String,
    pub subscriber_details: serde_json::Value,
    pub beneficiary_personal_details: serde_json::Value,
    pub beneficiary_health_details: serde_json::Value,
    pub farewell_plan: String,
    pub service_duration: String,
    pub subscription_amount: i32,
    pub auto_renewal: String,
    pub status: String,
    pub referral_code: Option<String>,
    pub referrer_name: Option<String>,
}
