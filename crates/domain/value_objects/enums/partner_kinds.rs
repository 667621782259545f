use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Partner organisations sharing one registration flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PartnerKind {
    #[serde(rename = "hospitals-and-clinics")]
    Hospital,
    #[serde(rename = "laboratory")]
    Laboratory,
    #[serde(rename = "pharmacy")]
    Pharmacy,
    #[serde(rename = "solace-partner")]
    SolacePartner,
}

impl PartnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerKind::Hospital => "hospitals-and-clinics",
            PartnerKind::Laboratory => "laboratory",
            PartnerKind::Pharmacy => "pharmacy",
            PartnerKind::SolacePartner => "solace-partner",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "hospitals-and-clinics" => Some(PartnerKind::Hospital),
            "laboratory" => Some(PartnerKind::Laboratory),
            "pharmacy" => Some(PartnerKind::Pharmacy),
            "solace-partner" => Some(PartnerKind::SolacePartner),
            _ => None,
        }
    }
}

impl Display for PartnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
