//! Repository layer: note collection ownership and access contracts.
//!
//! # Responsibility
//! - Define the use-case oriented note access contract.
//! - Own the collection, the id counter and their mutual-exclusion scheme.
//!
//! # Invariants
//! - Repository APIs return semantic "not found" results (`None`/`false`)
//!   instead of errors; only invalid input raises.
//! - Notes handed out to callers are snapshots, never live internal state.

pub mod note_repo;
