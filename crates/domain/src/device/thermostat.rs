//! Thermostat — a target temperature in degrees Celsius.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeValue;
use crate::device::{Controllable, DeviceChanges, DeviceKind, InvalidPayload};

/// Accepted target temperatures.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=40.0;

const DEFAULT_TEMPERATURE: f64 = 20.0;

/// Thermostat payload. Starts at 20°C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ThermostatFields")]
pub struct Thermostat {
    temperature: f64,
}

#[derive(Deserialize)]
struct ThermostatFields {
    temperature: f64,
}

impl TryFrom<ThermostatFields> for Thermostat {
    type Error = InvalidPayload;

    fn try_from(fields: ThermostatFields) -> Result<Self, Self::Error> {
        if !TEMPERATURE_RANGE.contains(&fields.temperature) {
            return Err(InvalidPayload {
                kind: DeviceKind::Thermostat,
                reason: "temperature outside 0..=40",
            });
        }
        Ok(Self {
            temperature: fields.temperature,
        })
    }
}

impl Default for Thermostat {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Thermostat {
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

impl Controllable for Thermostat {
    // Whole degrees are reported as integers.
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn info_fields(&self) -> BTreeMap<String, AttributeValue> {
        let temperature = if self.temperature.fract() == 0.0 {
            AttributeValue::Int(self.temperature as i64)
        } else {
            AttributeValue::Float(self.temperature)
        };
        BTreeMap::from([("temperature".to_string(), temperature)])
    }

    fn apply(&mut self, changes: &DeviceChanges) -> bool {
        match changes
            .get("temperature")
            .and_then(AttributeValue::as_number)
        {
            // NaN never falls inside the range.
            Some(temperature) if TEMPERATURE_RANGE.contains(&temperature) => {
                self.temperature = temperature;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_twenty_degrees() {
        assert!((Thermostat::default().temperature() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_integer_temperature() {
        let mut thermostat = Thermostat::default();
        assert!(thermostat.apply(&DeviceChanges::new().with("temperature", 25)));
        assert!((thermostat.temperature() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_fractional_temperature() {
        let mut thermostat = Thermostat::default();
        assert!(thermostat.apply(&DeviceChanges::new().with("temperature", 21.5)));
        assert!((thermostat.temperature() - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn should_accept_range_bounds() {
        let mut thermostat = Thermostat::default();
        assert!(thermostat.apply(&DeviceChanges::new().with("temperature", 0)));
        assert!(thermostat.apply(&DeviceChanges::new().with("temperature", 40)));
    }

    #[test]
    fn should_ignore_temperature_out_of_range() {
        let mut thermostat = Thermostat::default();
        assert!(!thermostat.apply(&DeviceChanges::new().with("temperature", 40.5)));
        assert!(!thermostat.apply(&DeviceChanges::new().with("temperature", -1)));
        assert!(!thermostat.apply(&DeviceChanges::new().with("temperature", f64::NAN)));
        assert!((thermostat.temperature() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_report_whole_degrees_as_int() {
        let mut thermostat = Thermostat::default();
        assert_eq!(
            thermostat.info_fields().get("temperature"),
            Some(&AttributeValue::Int(20))
        );
        thermostat.apply(&DeviceChanges::new().with("temperature", 21.5));
        assert_eq!(
            thermostat.info_fields().get("temperature"),
            Some(&AttributeValue::Float(21.5))
        );
    }

    #[test]
    fn should_reject_stored_temperature_out_of_range() {
        assert!(serde_json::from_str::<Thermostat>(r#"{"temperature": 40.5}"#).is_err());
        let thermostat: Thermostat = serde_json::from_str(r#"{"temperature": 25}"#).unwrap();
        assert!((thermostat.temperature() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_ignore_non_numeric_temperature() {
        let mut thermostat = Thermostat::default();
        assert!(!thermostat.apply(&DeviceChanges::new().with("temperature", "25")));
        assert!(!thermostat.apply(&DeviceChanges::new().with("temperature", true)));
    }
}
