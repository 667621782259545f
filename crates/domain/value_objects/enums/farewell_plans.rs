use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Farewell Cover tiers as they appear on the public sign-up form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FarewellPlan {
    #[serde(rename = "Pink Diamond Plan")]
    PinkDiamond,
    #[serde(rename = "Blue Diamond Plan")]
    BlueDiamond,
    #[serde(rename = "Red Diamond Plan")]
    RedDiamond,
}

impl FarewellPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            FarewellPlan::PinkDiamond => "Pink Diamond Plan",
            FarewellPlan::BlueDiamond => "Blue Diamond Plan",
            FarewellPlan::RedDiamond => "Red Diamond Plan",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Pink Diamond Plan" => Some(FarewellPlan::PinkDiamond),
            "Blue Diamond Plan" => Some(FarewellPlan::BlueDiamond),
            "Red Diamond Plan" => Some(FarewellPlan::RedDiamond),
            _ => None,
        }
    }
}

impl Display for FarewellPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
