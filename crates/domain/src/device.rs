//! Device — a controllable thing tracked by the system.
//!
//! Every device carries an immutable identifier and a variant payload
//! ([`DeviceState`]). The variant decides which fields the device reports
//! and which modifications it accepts, through the [`Controllable`] trait.

pub mod changes;
pub mod dimmer;
pub mod info;
pub mod kind;
pub mod lock;
pub mod switch;
pub mod thermostat;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::attribute::AttributeValue;
use crate::error::HomeTrackError;
use crate::id::DeviceId;

pub use changes::DeviceChanges;
pub use dimmer::Dimmer;
pub use info::DeviceInfo;
pub use kind::DeviceKind;
pub use lock::{Lock, LockState};
pub use switch::{Power, Switch};
pub use thermostat::Thermostat;

/// Capability shared by every device variant.
pub trait Controllable {
    /// Variant-specific fields reported alongside `id` and `type`.
    fn info_fields(&self) -> BTreeMap<String, AttributeValue>;

    /// Apply the recognised and valid fields of `changes`.
    ///
    /// Unknown fields and invalid values are ignored. Returns `true` when at
    /// least one field was applied.
    fn apply(&mut self, changes: &DeviceChanges) -> bool;
}

/// A serialized payload whose fields break its variant's constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} payload: {reason}")]
pub struct InvalidPayload {
    pub kind: DeviceKind,
    pub reason: &'static str,
}

/// Per-variant payload of a [`Device`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DeviceState {
    Switch(Switch),
    Dimmer(Dimmer),
    Lock(Lock),
    Thermostat(Thermostat),
}

impl DeviceState {
    /// The kind tag matching this payload.
    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        match self {
            Self::Switch(_) => DeviceKind::Switch,
            Self::Dimmer(_) => DeviceKind::Dimmer,
            Self::Lock(_) => DeviceKind::Lock,
            Self::Thermostat(_) => DeviceKind::Thermostat,
        }
    }

    fn as_controllable(&self) -> &dyn Controllable {
        match self {
            Self::Switch(inner) => inner,
            Self::Dimmer(inner) => inner,
            Self::Lock(inner) => inner,
            Self::Thermostat(inner) => inner,
        }
    }

    fn as_controllable_mut(&mut self) -> &mut dyn Controllable {
        match self {
            Self::Switch(inner) => inner,
            Self::Dimmer(inner) => inner,
            Self::Lock(inner) => inner,
            Self::Thermostat(inner) => inner,
        }
    }
}

impl From<DeviceKind> for DeviceState {
    fn from(kind: DeviceKind) -> Self {
        match kind {
            DeviceKind::Switch => Self::Switch(Switch::default()),
            DeviceKind::Dimmer => Self::Dimmer(Dimmer::default()),
            DeviceKind::Lock => Self::Lock(Lock::default()),
            DeviceKind::Thermostat => Self::Thermostat(Thermostat::default()),
        }
    }
}

/// A tracked device with its current variant state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    #[serde(flatten)]
    state: DeviceState,
}

impl Device {
    /// Create a device of the given kind with a fresh id and default state.
    #[must_use]
    pub fn new(kind: DeviceKind) -> Self {
        Self {
            id: DeviceId::new(),
            state: kind.into(),
        }
    }

    /// Create a device from a kind name, matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when `name` is not one of
    /// `switch`, `dimmer`, `lock` or `thermostat`.
    pub fn from_kind_name(name: &str) -> Result<Self, HomeTrackError> {
        let kind: DeviceKind = name.parse()?;
        Ok(Self::new(kind))
    }

    #[must_use]
    pub fn kind(&self) -> DeviceKind {
        self.state.kind()
    }

    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Snapshot of the device as a flat field map.
    #[must_use]
    pub fn info(&self) -> DeviceInfo {
        DeviceInfo {
            id: self.id,
            kind: self.kind(),
            fields: self.state.as_controllable().info_fields(),
        }
    }

    /// Apply `changes` in place. See [`Controllable::apply`].
    pub fn modify(&mut self, changes: &DeviceChanges) -> bool {
        self.state.as_controllable_mut().apply(changes)
    }
}
