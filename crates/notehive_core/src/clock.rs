//! Calendar clock collaborator.
//!
//! # Responsibility
//! - Supply "today's date" to note creation without binding the domain to
//!   the host system time.
//!
//! # Invariants
//! - A clock answers synchronously and never fails.

use time::{Date, OffsetDateTime};

/// Source of the current calendar date.
///
/// Kept as a trait so tests can pin creation dates deterministically.
pub trait Clock: Send + Sync {
    /// Returns the current calendar date.
    fn today(&self) -> Date;
}

/// Clock backed by the host system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        // Local calendar date when the offset is known; UTC otherwise.
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
            .date()
    }
}

/// Clock pinned to one fixed date.
///
/// Used by tests and by import paths where the creation date is already
/// known.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
