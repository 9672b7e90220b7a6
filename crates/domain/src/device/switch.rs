//! Switch — a two-position on/off device.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeValue;
use crate::device::{Controllable, DeviceChanges};

/// Position of a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    On,
    #[default]
    Off,
}

impl Power {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    /// Parse the exact lowercase name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            _ => None,
        }
    }
}

/// Switch payload. Starts [`Power::Off`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Switch {
    state: Power,
}

impl Switch {
    #[must_use]
    pub fn state(&self) -> Power {
        self.state
    }
}

impl Controllable for Switch {
    fn info_fields(&self) -> BTreeMap<String, AttributeValue> {
        BTreeMap::from([("state".to_string(), self.state.as_str().into())])
    }

    fn apply(&mut self, changes: &DeviceChanges) -> bool {
        match changes
            .get("state")
            .and_then(AttributeValue::as_str)
            .and_then(Power::parse)
        {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }
}
