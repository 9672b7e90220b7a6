//! Device service — use-cases for managing devices.

use hometrack_domain::device::{Device, DeviceChanges, DeviceInfo};
use hometrack_domain::error::{ConflictError, HomeTrackError, NotFoundError};
use hometrack_domain::id::{DeviceId, HubId};

use crate::ports::{DeviceRepository, PairingRepository};

/// Application service for device creation, mutation and deletion.
///
/// Consults the pairing relation so that a paired device is never deleted.
pub struct DeviceService<R, P> {
    repo: R,
    pairings: P,
}

impl<R: DeviceRepository, P: PairingRepository> DeviceService<R, P> {
    /// Create a new service backed by the given repositories.
    pub fn new(repo: R, pairings: P) -> Self {
        Self { repo, pairings }
    }

    /// Create and store a device of the named kind.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when `kind` does not name a
    /// device variant, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, kind: &str) -> Result<Device, HomeTrackError> {
        let device = Device::from_kind_name(kind)?;
        let device = self.repo.create(device).await?;
        tracing::info!(device_id = %device.id, kind = %device.kind(), "device created");
        Ok(device)
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, HomeTrackError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Delete a device that is not paired to any hub.
    ///
    /// The pairing is checked again after removal. If the device was paired
    /// in between, it is stored back and the delete is refused, so a pairing
    /// never outlives its device. [`HubService::pair_device_to_hub`] does the
    /// mirror check.
    ///
    /// [`HubService::pair_device_to_hub`]: crate::services::hub_service::HubService::pair_device_to_hub
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when the device does not exist,
    /// [`HomeTrackError::Conflict`] when it is currently paired, or a storage
    /// error from either repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: DeviceId) -> Result<(), HomeTrackError> {
        let device = self.get_device(id).await?;
        if let Some(hub_id) = self.pairings.hub_for_device(id).await? {
            return Err(refuse_delete(id, hub_id));
        }
        self.repo.delete(id).await?;
        if let Some(hub_id) = self.pairings.hub_for_device(id).await? {
            self.repo.create(device).await?;
            tracing::debug!(%hub_id, "device paired during delete, restored");
            return Err(refuse_delete(id, hub_id));
        }
        tracing::info!("device deleted");
        Ok(())
    }

    /// Snapshot of a device's fields.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when the device does not exist,
    /// or a storage error from the repository.
    pub async fn info(&self, id: DeviceId) -> Result<DeviceInfo, HomeTrackError> {
        Ok(self.get_device(id).await?.info())
    }

    /// Apply `changes` to a device and persist it if anything was applied.
    ///
    /// Returns whether at least one field was applied. Invalid or unknown
    /// fields are ignored rather than reported.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when the device does not exist,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn modify(
        &self,
        id: DeviceId,
        changes: &DeviceChanges,
    ) -> Result<bool, HomeTrackError> {
        let mut device = self.get_device(id).await?;
        if !device.modify(changes) {
            tracing::debug!(?changes, "no field applied");
            return Ok(false);
        }
        self.repo.update(device).await?;
        tracing::debug!("device modified");
        Ok(true)
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list(&self) -> Result<Vec<Device>, HomeTrackError> {
        self.repo.get_all().await
    }
}

fn refuse_delete(device_id: DeviceId, hub_id: HubId) -> HomeTrackError {
    tracing::warn!(%hub_id, "refusing to delete paired device");
    ConflictError::DevicePaired { device_id, hub_id }.into()
}
