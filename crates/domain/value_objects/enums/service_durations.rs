use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Billing frequency for Farewell Cover. The wire values keep the historical
/// "per ..." spelling the forms and Paystack metadata already use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceDuration {
    #[serde(rename = "per quarterly")]
    Quarterly,
    #[serde(rename = "per bi-annual")]
    BiAnnual,
    #[serde(rename = "per annual")]
    Annual,
}

impl ServiceDuration {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceDuration::Quarterly => "per quarterly",
            ServiceDuration::BiAnnual => "per bi-annual",
            ServiceDuration::Annual => "per annual",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "per quarterly" => Some(ServiceDuration::Quarterly),
            "per bi-annual" => Some(ServiceDuration::BiAnnual),
            "per annual" => Some(ServiceDuration::Annual),
            _ => None,
        }
    }

    /// Months covered by one billing period.
    pub fn months(&self) -> u32 {
        match self {
            ServiceDuration::Quarterly => 3,
            ServiceDuration::BiAnnual => 6,
            ServiceDuration::Annual => 12,
        }
    }
}

impl Display for ServiceDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
