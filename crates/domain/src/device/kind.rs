//! Device kind — the closed set of supported device variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotFoundError;

/// Which variant a device is. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Switch,
    Dimmer,
    Lock,
    Thermostat,
}

impl DeviceKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [Self; 4] = [Self::Switch, Self::Dimmer, Self::Lock, Self::Thermostat];

    /// Lowercase name used in info maps and when parsing.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Dimmer => "dimmer",
            Self::Lock => "lock",
            Self::Thermostat => "thermostat",
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceKind {
    type Err = NotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| NotFoundError {
                entity: "DeviceKind",
                id: s.to_string(),
            })
    }
}
