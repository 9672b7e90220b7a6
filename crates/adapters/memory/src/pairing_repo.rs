//! In-memory implementation of [`PairingRepository`].

use std::future::Future;

use parking_lot::Mutex;

use hometrack_app::ports::PairingRepository;
use hometrack_domain::error::HomeTrackError;
use hometrack_domain::id::{DeviceId, HubId};
use hometrack_domain::pairing::Pairings;

/// Pairing relation guarded by a single lock, so both directions change together.
#[derive(Debug, Default)]
pub struct InMemoryPairingRepository {
    pairings: Mutex<Pairings>,
}

impl InMemoryPairingRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `device_id` is currently paired to any hub.
    #[must_use]
    pub fn is_paired(&self, device_id: DeviceId) -> bool {
        self.pairings.lock().is_paired(device_id)
    }
}

impl PairingRepository for InMemoryPairingRepository {
    fn pair(
        &self,
        device_id: DeviceId,
        hub_id: HubId,
    ) -> impl Future<Output = Result<(), HomeTrackError>> + Send {
        let result = self
            .pairings
            .lock()
            .pair(device_id, hub_id)
            .map_err(HomeTrackError::from);
        async move { result }
    }

    fn unpair(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Option<HubId>, HomeTrackError>> + Send {
        let result = self.pairings.lock().unpair(device_id);
        async move { Ok(result) }
    }

    fn hub_for_device(
        &self,
        device_id: DeviceId,
    ) -> impl Future<Output = Result<Option<HubId>, HomeTrackError>> + Send {
        let result = self.pairings.lock().hub_for(device_id);
        async move { Ok(result) }
    }

    fn devices_for_hub(
        &self,
        hub_id: HubId,
    ) -> impl Future<Output = Result<Vec<DeviceId>, HomeTrackError>> + Send {
        let result = self.pairings.lock().devices_for_hub(hub_id);
        async move { Ok(result) }
    }
}
