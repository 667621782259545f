use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Farewell Cover lifecycle. Records are created inactive and only ever move
/// forward to active when the payment webhook confirms the charge.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FarewellCoverStatus {
    #[default]
    #[serde(rename = "inactive")]
    Inactive,
    #[serde(rename = "active")]
    Active,
}

impl FarewellCoverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FarewellCoverStatus::Inactive => "inactive",
            FarewellCoverStatus::Active => "active",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "inactive" => Some(FarewellCoverStatus::Inactive),
            "active" => Some(FarewellCoverStatus::Active),
            _ => None,
        }
    }
}

impl Display for FarewellCoverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Healthy Elders Club lifecycle, unverified until the webhook confirms.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthyEldersStatus {
    #[default]
    #[serde(rename = "unverified")]
    Unverified,
    #[serde(rename = "verified")]
    Verified,
}

impl HealthyEldersStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthyEldersStatus::Unverified => "unverified",
            HealthyEldersStatus::Verified => "verified",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "unverified" => Some(HealthyEldersStatus::Unverified),
            "verified" => Some(HealthyEldersStatus::Verified),
            _ => None,
        }
    }
}

impl Display for HealthyEldersStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
