//! # hometrack-adapter-memory
//!
//! Process-local storage adapter. State lives for the lifetime of the process.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hometrack-app::ports`
//! - Serialize access to each store behind a single mutex
//! - Keep both directions of the pairing relation under one lock
//!
//! ## Dependency rule
//! Depends on `hometrack-app` (for port traits) and `hometrack-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod device_repo;
mod dwelling_repo;
mod hub_repo;
mod pairing_repo;

pub use device_repo::InMemoryDeviceRepository;
pub use dwelling_repo::InMemoryDwellingRepository;
pub use hub_repo::InMemoryHubRepository;
pub use pairing_repo::InMemoryPairingRepository;
