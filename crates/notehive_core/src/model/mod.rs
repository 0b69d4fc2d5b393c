//! Domain model for notes.
//!
//! # Responsibility
//! - Define the note entity used by all repository operations.
//! - Enforce field-level invariants at the entity boundary.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned once.
//! - Entity mutations validate their input before any state change.

pub mod note;
