use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    enums::auto_renewal::AutoRenewal, farewell_cover::SubscriberDetails,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryLocation {
    pub state: String,
    pub city: String,
    pub detailed_address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthyEldersBeneficiary {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub location: BeneficiaryLocation,
}

/// Payment block for the club. Fees are fixed product-wide; the form only
/// chooses renewal behaviour and payment method.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthyEldersPaymentInformation {
    #[serde(default = "default_membership_fee")]
    pub membership_fee: i32,
    #[serde(default = "default_total_amount")]
    pub total_amount_to_be_paid: i32,
    #[serde(default = "default_auto_renewal")]
    pub auto_renewal: AutoRenewal,
    #[serde(default = "default_payment_method")]
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer_name: Option<String>,
}

fn default_membership_fee() -> i32 {
    1000
}

fn default_auto_renewal() -> AutoRenewal {
    AutoRenewal::On
}

fn default_total_amount() -> i32 {
    12000
}

fn default_payment_method() -> String {
    "card".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHealthyEldersModel {
    pub subscriber_details: SubscriberDetails,
    pub beneficiary_details: HealthyEldersBeneficiary,
    pub payment_information: HealthyEldersPaymentInformation,
}
