use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::{
    auto_renewal::AutoRenewal, farewell_plans::FarewellPlan, service_durations::ServiceDuration,
};

/// Paying party details, shared by both subscription products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryAddress {
    pub state_of_residence: String,
    pub local_govt_of_residence: String,
    pub detailed_residential_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryPersonalDetails {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Hosted photo URL, filled in after the upload succeeds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub phone_number: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub address: BeneficiaryAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryHealthDetails {
    pub health_condition: String,
}

/// Plan selection as submitted on the sign-up form. The amount is computed
/// server-side from the price table, never taken from the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FarewellSubscriptionDetails {
    pub farewell_plan: FarewellPlan,
    pub service_duration: ServiceDuration,
    #[serde(default)]
    pub subscription_amount: i32,
    #[serde(default)]
    pub auto_renewal: AutoRenewal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_name: Option<String>,
}

/// Full sign-up form for a Farewell Cover plan, minus the photo bytes which
/// arrive as a separate multipart part.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFarewellCoverModel {
    pub relationship_with_beneficiary: String,
    pub subscriber_details: SubscriberDetails,
    pub beneficiary_personal_details: BeneficiaryPersonalDetails,
    pub beneficiary_health_details: BeneficiaryHealthDetails,
    pub subscription_details: FarewellSubscriptionDetails,
}
