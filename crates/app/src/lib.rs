//! # hometrack-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceRepository` — CRUD for devices
//!   - `HubRepository` — create and query hubs
//!   - `DwellingRepository` — CRUD for dwellings
//!   - `PairingRepository` — the device ↔ hub relation
//! - Define **driving/inbound ports** as use-case structs:
//!   - `DeviceService` — create, modify, inspect and delete devices
//!   - `HubService` — create hubs, pair and unpair devices, hub-scoped views
//!   - `DwellingService` — occupancy and hub installation
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `hometrack-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
