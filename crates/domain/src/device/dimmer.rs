//! Dimmer — a light with integer brightness.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeValue;
use crate::device::{Controllable, DeviceChanges, DeviceKind, InvalidPayload};

/// Highest accepted brightness.
pub const MAX_BRIGHTNESS: u8 = 100;

/// Dimmer payload. Brightness is always within `0..=100`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DimmerFields")]
pub struct Dimmer {
    brightness: u8,
}

#[derive(Deserialize)]
struct DimmerFields {
    brightness: u8,
}

impl TryFrom<DimmerFields> for Dimmer {
    type Error = InvalidPayload;

    fn try_from(fields: DimmerFields) -> Result<Self, Self::Error> {
        if fields.brightness > MAX_BRIGHTNESS {
            return Err(InvalidPayload {
                kind: DeviceKind::Dimmer,
                reason: "brightness above 100",
            });
        }
        Ok(Self {
            brightness: fields.brightness,
        })
    }
}

impl Dimmer {
    #[must_use]
    pub fn brightness(&self) -> u8 {
        self.brightness
    }
}

impl Controllable for Dimmer {
    fn info_fields(&self) -> BTreeMap<String, AttributeValue> {
        BTreeMap::from([("brightness".to_string(), self.brightness.into())])
    }

    fn apply(&mut self, changes: &DeviceChanges) -> bool {
        let Some(value) = changes.get("brightness").and_then(AttributeValue::as_int) else {
            return false;
        };
        match u8::try_from(value) {
            Ok(brightness) if brightness <= MAX_BRIGHTNESS => {
                self.brightness = brightness;
                true
            }
            _ => false,
        }
    }
}
