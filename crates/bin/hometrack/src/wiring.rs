//! Wiring of in-memory adapters into the application services.

use std::sync::Arc;

use hometrack_adapter_memory::{
    InMemoryDeviceRepository, InMemoryDwellingRepository, InMemoryHubRepository,
    InMemoryPairingRepository,
};
use hometrack_app::services::device_service::DeviceService;
use hometrack_app::services::dwelling_service::DwellingService;
use hometrack_app::services::hub_service::HubService;

type Pairings = Arc<InMemoryPairingRepository>;

pub type Devices = DeviceService<InMemoryDeviceRepository, Pairings>;
pub type Hubs = HubService<InMemoryHubRepository, InMemoryDeviceRepository, Pairings>;
pub type Dwellings = DwellingService<InMemoryDwellingRepository>;

/// The three top-level services, sharing one pairing relation.
pub struct Services {
    pub devices: Arc<Devices>,
    pub hubs: Hubs,
    pub dwellings: Dwellings,
}

impl Services {
    /// Build every service on fresh in-memory repositories.
    #[must_use]
    pub fn in_memory() -> Self {
        let pairings = Arc::new(InMemoryPairingRepository::new());
        let devices = Arc::new(DeviceService::new(
            InMemoryDeviceRepository::new(),
            Arc::clone(&pairings),
        ));
        let hubs = HubService::new(InMemoryHubRepository::new(), pairings, Arc::clone(&devices));
        let dwellings = DwellingService::new(InMemoryDwellingRepository::new());

        Self {
            devices,
            hubs,
            dwellings,
        }
    }
}
