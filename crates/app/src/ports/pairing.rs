//! Pairing port — storage for the device ↔ hub relation.

use std::future::Future;
use std::sync::Arc;

use hometrack_domain::error::HomeTrackError;
use hometrack_domain::id::{DeviceId, HubId};

/// Stores which hub each device is paired to.
///
/// Implementations must update both directions of the relation atomically.
/// Existence of the device or hub is not checked here.
pub trait PairingRepository {
    /// Pair a device with a hub.
    ///
    /// Fails with [`HomeTrackError::Conflict`] when the device is already
    /// paired to any hub, including `hub_id`.
    fn pair(
        &self,
        device_id: DeviceId,
        hub_id: HubId,
    ) -> impl Future<Output = Result<(), HomeTrackError>> + Send;

    /// Remove the pairing of a device, returning the hub it was paired to,
    /// or `None` if it was not paired.
    fn unpair(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Option<HubId>, HomeTrackError>> + Send;

    /// The hub a device is currently paired to.
    fn hub_for_device(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Option<HubId>, HomeTrackError>> + Send;

    /// Devices currently paired to a hub. Empty for unknown hubs.
    fn devices_for_hub(
        &self,
        hub_id: HubId,
    ) -> impl Future<Output = Result<Vec<DeviceId>, HomeTrackError>> + Send;
}

impl<T: PairingRepository + Send + Sync> PairingRepository for Arc<T> {
    fn pair(
        &self,
        device_id: DeviceId,
        hub_id: HubId,
    ) -> impl Future<Output = Result<(), HomeTrackError>> + Send {
        (**self).pair(device_id, hub_id)
    }

    fn unpair(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Option<HubId>, HomeTrackError>> + Send {
        (**self).unpair(device_id)
    }

    fn hub_for_device(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Option<HubId>, HomeTrackError>> + Send {
        (**self).hub_for_device(device_id)
    }

    fn devices_for_hub(
        &self,
        hub_id: HubId,
    ) -> impl Future<Output = Result<Vec<DeviceId>, HomeTrackError>> + Send {
        (**self).devices_for_hub(hub_id)
    }
}
