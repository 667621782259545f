use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Caregiver professions sharing one registration flow. Each role maps to a
/// public route segment under /v2/api/care-givers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CaregiverRole {
    #[serde(rename = "doctor")]
    Doctor,
    #[serde(rename = "nurse")]
    Nurse,
    #[serde(rename = "therapist")]
    Therapist,
    #[serde(rename = "nutritionist")]
    Nutritionist,
    #[serde(rename = "undertaker")]
    Undertaker,
    #[serde(rename = "care-giver")]
    Caregiver,
}

impl CaregiverRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaregiverRole::Doctor => "doctor",
            CaregiverRole::Nurse => "nurse",
            CaregiverRole::Therapist => "therapist",
            CaregiverRole::Nutritionist => "nutritionist",
            CaregiverRole::Undertaker => "undertaker",
            CaregiverRole::Caregiver => "care-giver",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "doctor" => Some(CaregiverRole::Doctor),
            "nurse" => Some(CaregiverRole::Nurse),
            "therapist" => Some(CaregiverRole::Therapist),
            "nutritionist" => Some(CaregiverRole::Nutritionist),
            "undertaker" => Some(CaregiverRole::Undertaker),
            "care-giver" => Some(CaregiverRole::Caregiver),
            _ => None,
        }
    }
}

impl Display for CaregiverRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
