use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Auto-renewal toggle. The forms submit checkbox values, hence "on"/"off".
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AutoRenewal {
    #[serde(rename = "on")]
    On,
    #[default]
    #[serde(rename = "off")]
    Off,
}

impl AutoRenewal {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutoRenewal::On => "on",
            AutoRenewal::Off => "off",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "on" => Some(AutoRenewal::On),
            "off" => Some(AutoRenewal::Off),
            _ => None,
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, AutoRenewal::On)
    }

    /// Renewal wording used in confirmation emails.
    pub fn renewal_type(&self) -> &'static str {
        match self {
            AutoRenewal::On => "Auto Renew",
            AutoRenewal::Off => "One Time Payment",
        }
    }
}

impl Display for AutoRenewal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
