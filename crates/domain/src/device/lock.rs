//! Lock — a door lock with an optional pin code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeValue;
use crate::device::{Controllable, DeviceChanges, DeviceKind, InvalidPayload};

/// Bolt position of a lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockState {
    #[default]
    Locked,
    Unlocked,
}

impl LockState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Locked => "locked",
            Self::Unlocked => "unlocked",
        }
    }

    /// Parse the exact lowercase name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "locked" => Some(Self::Locked),
            "unlocked" => Some(Self::Unlocked),
            _ => None,
        }
    }
}

/// Lock payload. Starts locked with no pin.
///
/// The pin code is never reported in info, only whether one is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LockFields")]
pub struct Lock {
    state: LockState,
    pin_code: Option<String>,
}

#[derive(Deserialize)]
struct LockFields {
    state: LockState,
    pin_code: Option<String>,
}

impl TryFrom<LockFields> for Lock {
    type Error = InvalidPayload;

    fn try_from(fields: LockFields) -> Result<Self, Self::Error> {
        if fields.pin_code.as_deref() == Some("") {
            return Err(InvalidPayload {
                kind: DeviceKind::Lock,
                reason: "empty pin code",
            });
        }
        Ok(Self {
            state: fields.state,
            pin_code: fields.pin_code,
        })
    }
}

impl Lock {
    #[must_use]
    pub fn state(&self) -> LockState {
        self.state
    }

    #[must_use]
    pub fn has_pin(&self) -> bool {
        self.pin_code.is_some()
    }
}

/// Pin codes are opaque text; numbers are kept in their printed form.
fn pin_text(value: &AttributeValue) -> Option<String> {
    match value {
        AttributeValue::String(pin) if !pin.is_empty() => Some(pin.clone()),
        AttributeValue::Int(pin) => Some(pin.to_string()),
        AttributeValue::Float(pin) if pin.is_finite() => Some(pin.to_string()),
        _ => None,
    }
}

impl Controllable for Lock {
    fn info_fields(&self) -> BTreeMap<String, AttributeValue> {
        BTreeMap::from([
            ("state".to_string(), self.state.as_str().into()),
            ("has_pin".to_string(), self.has_pin().into()),
        ])
    }

    // State and pin are applied independently of each other.
    fn apply(&mut self, changes: &DeviceChanges) -> bool {
        let mut applied = false;

        if let Some(state) = changes
            .get("state")
            .and_then(AttributeValue::as_str)
            .and_then(LockState::parse)
        {
            self.state = state;
            applied = true;
        }

        if let Some(pin_code) = changes.get("pin_code").and_then(pin_text) {
            self.pin_code = Some(pin_code);
            applied = true;
        }

        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_locked_without_pin() {
        let lock = Lock::default();
        assert_eq!(lock.state(), LockState::Locked);
        assert!(!lock.has_pin());
    }

    #[test]
    fn should_apply_pin_and_state_together() {
        let mut lock = Lock::default();
        let changes = DeviceChanges::new()
            .with("pin_code", "1234")
            .with("state", "unlocked");

        assert!(lock.apply(&changes));
        assert_eq!(lock.state(), LockState::Unlocked);
        assert!(lock.has_pin());
    }

    #[test]
    fn should_apply_pin_when_state_is_invalid() {
        let mut lock = Lock::default();
        let changes = DeviceChanges::new()
            .with("pin_code", "0000")
            .with("state", "open");

        assert!(lock.apply(&changes));
        assert_eq!(lock.state(), LockState::Locked);
        assert!(lock.has_pin());
    }

    #[test]
    fn should_apply_state_when_pin_is_empty() {
        let mut lock = Lock::default();
        let changes = DeviceChanges::new()
            .with("pin_code", "")
            .with("state", "unlocked");

        assert!(lock.apply(&changes));
        assert_eq!(lock.state(), LockState::Unlocked);
        assert!(!lock.has_pin());
    }

    #[test]
    fn should_report_nothing_applied_when_both_invalid() {
        let mut lock = Lock::default();
        let changes = DeviceChanges::new().with("pin_code", "").with("state", "on");
        assert!(!lock.apply(&changes));
        assert_eq!(lock, Lock::default());
    }

    #[test]
    fn should_accept_numeric_pin_as_text() {
        let mut lock = Lock::default();
        assert!(lock.apply(&DeviceChanges::new().with("pin_code", 1234)));
        assert!(lock.has_pin());
        assert_eq!(lock.pin_code.as_deref(), Some("1234"));
    }

    #[test]
    fn should_ignore_boolean_pin() {
        let mut lock = Lock::default();
        assert!(!lock.apply(&DeviceChanges::new().with("pin_code", true)));
        assert!(!lock.has_pin());
    }

    #[test]
    fn should_unlock_when_requested_pin_is_null() {
        let mut lock = Lock::default();
        let changes: DeviceChanges =
            serde_json::from_str(r#"{"state": "unlocked", "pin_code": null}"#).unwrap();

        assert!(lock.apply(&changes));
        assert_eq!(lock.state(), LockState::Unlocked);
        assert!(!lock.has_pin());
    }

    #[test]
    fn should_reject_stored_empty_pin() {
        let result = serde_json::from_str::<Lock>(r#"{"state": "unlocked", "pin_code": ""}"#);
        assert!(result.is_err());
        let lock: Lock = serde_json::from_str(r#"{"state": "unlocked", "pin_code": null}"#).unwrap();
        assert!(!lock.has_pin());
    }

    #[test]
    fn should_hide_pin_in_info_fields() {
        let mut lock = Lock::default();
        lock.apply(&DeviceChanges::new().with("pin_code", "9876"));

        let fields = lock.info_fields();
        assert_eq!(fields.get("has_pin"), Some(&AttributeValue::Bool(true)));
        assert!(!fields.contains_key("pin_code"));
    }
}
