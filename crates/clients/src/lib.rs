//! Clients domain module (salon client records, two tiers of detail).
//!
//! This crate contains business rules for salon clients, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage). `ClientShort`
//! carries identity and a visit counter; `Client` adds a discount rate and
//! the alternate construction shapes (fields, mapping, serialized JSON).

pub mod client;
pub mod short;

pub use client::Client;
pub use short::ClientShort;
