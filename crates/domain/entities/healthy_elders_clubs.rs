use anyhow::Context;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;

use crate::{
    domain::value_objects::{
        farewell_cover::SubscriberDetails, healthy_elders::HealthyEldersBeneficiary,
    },
    infra::db::postgres::schema::healthy_elders_clubs,
};

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = healthy_elders_clubs)]
pub struct HealthyEldersClubRow {
    pub id: String,
    pub subscriber_details: serde_json::Value,
    pub beneficiary_details: serde_json::Value,
    pub membership_fee: i32,
    pub total_amount_to_be_paid: i32,
    pub auto_renewal: String,
    pub payment_method: String,
    pub status: String,
    pub next_renewal: Option<DateTime<Utc>>,
    pub referral_code: Option<String>,
    pub referrer_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthyEldersClubEntity {
    pub id: String,
    pub subscriber_details: SubscriberDetails,
    pub beneficiary_details: HealthyEldersBeneficiary,
    pub membership_fee: i32,
    pub total_amount_to_be_paid: i32,
    pub auto_renewal: String,
    pub payment_method: String,
    pub status: String,
    pub next_renewal: Option<DateTime<Utc>>,
    pub referral_code: Option<String>,
    pub referrer_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<HealthyEldersClubRow> for HealthyEldersClubEntity {
    type Error = anyhow::Error;

    fn try_from(row: HealthyEldersClubRow) -> Result<Self, Self::Error> {
        Ok(Self {
            subscriber_details: serde_json::from_value(row.subscriber_details)
                .context("invalid subscriber_details json")?,
            beneficiary_details: serde_json::from_value(row.beneficiary_details)
                .context("invalid beneficiary_details json")?,
            id: row.id,
            membership_fee: row.membership_fee,
            total_amount_to_be_paid: row.total_amount_to_be_paid,
            auto_renewal: row.auto_renewal,
            payment_method: row.payment_method,
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
#[diesel(table_name = healthy_elders_clubs)]
pub struct InsertHealthyEldersClubEntity {
    pub id: String,
    pub subscriber_details: serde_json::Value,
    pub beneficiary_details: serde_json::Value,
    pub membership_fee: i32,
    pub total_amount_to_be_paid: i32,
    pub auto_renewal: String,
    pub payment_method: String,
    pub status: String,
    pub referral_code: Option<String>,
    pub referrer_name: Option<String>,
}
