//! Hub service — use-cases for hubs and the devices paired to them.

use std::sync::Arc;

use hometrack_domain::device::{Device, DeviceInfo};
use hometrack_domain::error::{ConflictError, HomeTrackError, NotFoundError};
use hometrack_domain::hub::Hub;
use hometrack_domain::id::{DeviceId, HubId};

use crate::ports::{DeviceRepository, HubRepository, PairingRepository};
use crate::services::device_service::DeviceService;

/// Application service for hubs and pairing.
///
/// Shares the pairing relation with the [`DeviceService`] it composes.
pub struct HubService<H, D, P> {
    hubs: H,
    pairings: P,
    devices: Arc<DeviceService<D, P>>,
}

impl<H, D, P> HubService<H, D, P>
where
    H: HubRepository,
    D: DeviceRepository,
    P: PairingRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(hubs: H, pairings: P, devices: Arc<DeviceService<D, P>>) -> Self {
        Self {
            hubs,
            pairings,
            devices,
        }
    }

    /// Create and store a new hub.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create(&self) -> Result<Hub, HomeTrackError> {
        let hub = self.hubs.create(Hub::new()).await?;
        tracing::info!(hub_id = %hub.id, "hub created");
        Ok(hub)
    }

    /// Look up a hub by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when no hub with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_hub(&self, id: HubId) -> Result<Hub, HomeTrackError> {
        self.hubs.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Hub",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all hubs.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_hubs(&self) -> Result<Vec<Hub>, HomeTrackError> {
        self.hubs.get_all().await
    }

    /// Pair an existing device with an existing hub.
    ///
    /// The device is looked up again after pairing; if it was deleted in the
    /// meantime the pairing is undone and the device reported missing.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::NotFound`] when the device (checked first)
    /// or the hub does not exist, [`HomeTrackError::Conflict`] when the device
    /// is already paired to any hub, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn pair_device_to_hub(
        &self,
        hub_id: HubId,
        device_id: DeviceId,
    ) -> Result<(), HomeTrackError> {
        self.devices.get_device(device_id).await?;
        self.get_hub(hub_id).await?;
        if let Err(err) = self.pairings.pair(device_id, hub_id).await {
            tracing::warn!(error = %err, "pairing refused");
            return Err(err);
        }
        if let Err(err) = self.devices.get_device(device_id).await {
            self.pairings.unpair(device_id).await?;
            tracing::warn!(error = %err, "device deleted during pairing, unpaired");
            return Err(err);
        }
        tracing::info!("device paired");
        Ok(())
    }

    /// Boolean form of [`pair_device_to_hub`](Self::pair_device_to_hub).
    ///
    /// Returns `false` for every failure, so a missing device or hub cannot be
    /// told apart from a refused pairing.
    pub async fn try_pair_device_to_hub(&self, hub_id: HubId, device_id: DeviceId) -> bool {
        self.pair_device_to_hub(hub_id, device_id).await.is_ok()
    }

    /// Unpair a device from whichever hub it is paired to.
    ///
    /// Returns `false` when the device was not paired. Device existence is
    /// not checked.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the pairing repository.
    #[tracing::instrument(skip(self))]
    pub async fn remove_device_from_hub(&self, device_id: DeviceId) -> Result<bool, HomeTrackError> {
        match self.pairings.unpair(device_id).await? {
            Some(hub_id) => {
                tracing::info!(%hub_id, "device unpaired");
                Ok(true)
            }
            None => {
                tracing::debug!("device was not paired");
                Ok(false)
            }
        }
    }

    /// Device info as seen through the hub layer.
    ///
    /// Only devices that are **not** paired are reported; a paired device is
    /// rejected whichever hub it is paired to.
    ///
    /// # Errors
    ///
    /// Returns [`HomeTrackError::Conflict`] when the device is paired,
    /// [`HomeTrackError::NotFound`] when it does not exist, or a storage error.
    pub async fn device_info(&self, device_id: DeviceId) -> Result<DeviceInfo, HomeTrackError> {
        if let Some(hub_id) = self.pairings.hub_for_device(device_id).await? {
            return Err(ConflictError::DevicePaired { device_id, hub_id }.into());
        }
        self.devices.info(device_id).await
    }

    /// Devices currently paired to `hub_id`.
    ///
    /// Paired ids whose device no longer exists are skipped. Unknown hubs
    /// yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error from either repository.
    pub async fn list_devices(&self, hub_id: HubId) -> Result<Vec<Device>, HomeTrackError> {
        let ids = self.pairings.devices_for_hub(hub_id).await?;
        let mut devices = Vec::with_capacity(ids.len());
        for device_id in ids {
            match self.devices.get_device(device_id).await {
                Ok(device) => devices.push(device),
                Err(HomeTrackError::NotFound(err)) => {
                    tracing::warn!(%hub_id, error = %err, "skipping missing paired device");
                }
                Err(err) => return Err(err),
            }
        }
        Ok(devices)
    }
}
