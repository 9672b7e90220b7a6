//! Pairing — the relation between devices and the hub each one is paired to.
//!
//! A device is paired to at most one hub at a time. Both directions of the
//! relation live in [`Pairings`] and only [`Pairings::pair`] and
//! [`Pairings::unpair`] change them, so they can never disagree.

use std::collections::{BTreeSet, HashMap};

use crate::error::ConflictError;
use crate::id::{DeviceId, HubId};

/// Bidirectional device ↔ hub relation.
#[derive(Debug, Clone, Default)]
pub struct Pairings {
    device_to_hub: HashMap<DeviceId, HubId>,
    hub_to_devices: HashMap<HubId, BTreeSet<DeviceId>>,
}

impl Pairings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `device_id` with `hub_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictError::AlreadyPaired`] with the current hub when the
    /// device is already paired, even to `hub_id` itself.
    pub fn pair(&mut self, device_id: DeviceId, hub_id: HubId) -> Result<(), ConflictError> {
        if let Some(current) = self.hub_for(device_id) {
            return Err(ConflictError::AlreadyPaired {
                device_id,
                hub_id: current,
            });
        }
        self.device_to_hub.insert(device_id, hub_id);
        self.hub_to_devices
            .entry(hub_id)
            .or_default()
            .insert(device_id);
        Ok(())
    }

    /// Remove the pairing of `device_id`, returning the hub it was paired to.
    pub fn unpair(&mut self, device_id: DeviceId) -> Option<HubId> {
        let hub_id = self.device_to_hub.remove(&device_id)?;
        if let Some(devices) = self.hub_to_devices.get_mut(&hub_id) {
            devices.remove(&device_id);
            if devices.is_empty() {
                self.hub_to_devices.remove(&hub_id);
            }
        }
        Some(hub_id)
    }

    #[must_use]
    pub fn hub_for(&self, device_id: DeviceId) -> Option<HubId> {
        self.device_to_hub.get(&device_id).copied()
    }

    #[must_use]
    pub fn is_paired(&self, device_id: DeviceId) -> bool {
        self.device_to_hub.contains_key(&device_id)
    }

    /// Devices paired to `hub_id`, ordered by id. Empty for unknown hubs.
    #[must_use]
    pub fn devices_for_hub(&self, hub_id: HubId) -> Vec<DeviceId> {
        self.hub_to_devices
            .get(&hub_id)
            .map(|devices| devices.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of paired devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.device_to_hub.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.device_to_hub.is_empty()
    }
}
