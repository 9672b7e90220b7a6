//! Storage port — repository traits for devices, hubs and dwellings.

use std::future::Future;

use hometrack_domain::device::Device;
use hometrack_domain::dwelling::Dwelling;
use hometrack_domain::error::HomeTrackError;
use hometrack_domain::hub::Hub;
use hometrack_domain::id::{DeviceId, DwellingId, HubId};

/// Repository for persisting and querying [`Device`]s.
pub trait DeviceRepository {
    /// Store a new device. Identifiers are unique by construction.
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, HomeTrackError>> + Send;

    /// Get a device by its unique identifier.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HomeTrackError>> + Send;

    /// Get all devices, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HomeTrackError>> + Send;

    /// Replace a stored device with `device`.
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, HomeTrackError>> + Send;

    /// Delete a device, failing with [`HomeTrackError::NotFound`] if absent.
    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), HomeTrackError>> + Send;
}

/// Repository for persisting and querying [`Hub`]s. Hubs are never deleted.
pub trait HubRepository {
    /// Store a new hub.
    fn create(&self, hub: Hub) -> impl Future<Output = Result<Hub, HomeTrackError>> + Send;

    /// Get a hub by its unique identifier.
    fn get_by_id(
        &self,
        id: HubId,
    ) -> impl Future<Output = Result<Option<Hub>, HomeTrackError>> + Send;

    /// Get all hubs, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Hub>, HomeTrackError>> + Send;
}

/// Repository for persisting and querying [`Dwelling`]s.
pub trait DwellingRepository {
    /// Store a new dwelling.
    fn create(
        &self,
        dwelling: Dwelling,
    ) -> impl Future<Output = Result<Dwelling, HomeTrackError>> + Send;

    /// Get a dwelling by its unique identifier.
    fn get_by_id(
        &self,
        id: DwellingId,
    ) -> impl Future<Output = Result<Option<Dwelling>, HomeTrackError>> + Send;

    /// Get all dwellings, in no particular order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Dwelling>, HomeTrackError>> + Send;

    /// Replace a stored dwelling with `dwelling`.
    fn update(
        &self,
        dwelling: Dwelling,
    ) -> impl Future<Output = Result<Dwelling, HomeTrackError>> + Send;
}
