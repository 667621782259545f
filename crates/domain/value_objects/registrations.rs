use serde::{Deserialize, Serialize};

/// Contact block shared by caregiver registrations. Uniqueness checks and
/// welcome mail need these fields typed; the remaining role-specific blocks
/// stay as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaregiverPersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaregiverModel {
    pub license_number: String,
    #[serde(default)]
    pub specialty: Option<String>,
    pub personal_info: CaregiverPersonalInfo,
    #[serde(default)]
    pub employment: serde_json::Value,
    #[serde(default)]
    pub education: serde_json::Value,
    #[serde(default)]
    pub location: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContact {
    pub organization_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartnerModel {
    pub contact: PartnerContact,
    /// Kind-specific registration blocks (owner information, CAC details,
    /// operating licences) persisted verbatim.
    #[serde(default)]
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWaitlistEntryModel {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserModel {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub how_did_you_hear_about_us: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSuperAdminModel {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginModel {
    pub email: String,
    pub password: String,
}
