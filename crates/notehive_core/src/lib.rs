//! Core domain logic for NoteHive.
//! This crate is the single source of truth for business invariants.

pub mod clock;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{InvalidArgument, Note, NoteId};
pub use repo::note_repo::{InMemoryNoteRepository, NoteRepository, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
