//! Hub — a controller that devices pair with. Identity only.

use serde::{Deserialize, Serialize};

use crate::id::HubId;

/// A hub. Carries no state beyond its identifier and is never deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hub {
    pub id: HubId,
}

impl Hub {
    /// Create a hub with a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
