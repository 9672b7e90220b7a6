//! # hometrack-domain
//!
//! Pure domain model for the hometrack device-tracking system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, attribute values
//! - Define **Devices** (switches, dimmers, locks, thermostats) and their validation rules
//! - Define **Hubs** (identity-only controllers devices pair with)
//! - Define **Dwellings** (occupancy and the hub installed in them)
//! - Define **Pairings** (the device ↔ hub relation, at most one hub per device)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod attribute;
pub mod device;
pub mod dwelling;
pub mod hub;
pub mod pairing;
