use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserStatus {
    #[default]
    #[serde(rename = "Unverified")]
    Unverified,
    #[serde(rename = "Verified")]
    Verified,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Unverified => "Unverified",
            UserStatus::Verified => "Verified",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "Unverified" => Some(UserStatus::Unverified),
            "Verified" => Some(UserStatus::Verified),
            _ => None,
        }
    }
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
