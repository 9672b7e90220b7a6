//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HomeTrackError`] via `#[from]`.

use crate::id::{DeviceId, HubId};

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum HomeTrackError {
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    /// Failure inside a storage adapter.
    #[error("storage error")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A referenced identifier does not exist in its repository.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A business rule refused the operation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    /// The device is paired and the operation requires it not to be.
    #[error("device {device_id} is paired to hub {hub_id}")]
    DevicePaired { device_id: DeviceId, hub_id: HubId },

    /// The device is already paired, possibly to the requested hub.
    #[error("device {device_id} is already paired to hub {hub_id}")]
    AlreadyPaired { device_id: DeviceId, hub_id: HubId },
}

impl HomeTrackError {
    /// Whether this error reports a missing identifier.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error reports a refused business rule.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
