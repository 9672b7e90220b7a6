//! Dwelling — a home that may be occupied and may have a hub installed.

use serde::{Deserialize, Serialize};

use crate::id::{DwellingId, HubId};

/// A dwelling and its occupancy.
///
/// `hub_id` is stored verbatim; nothing checks that the hub exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dwelling {
    pub id: DwellingId,
    pub occupied: bool,
    pub hub_id: Option<HubId>,
}

impl Dwelling {
    /// Create a vacant dwelling with no hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    /// Install `hub_id`, replacing any previously installed hub.
    pub fn install_hub(&mut self, hub_id: HubId) {
        self.hub_id = Some(hub_id);
    }
}
