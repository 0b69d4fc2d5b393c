//! In-memory search entry points.
//!
//! # Responsibility
//! - Provide the matching primitives behind repository text/tag queries.
//! - Keep query shaping inside core.

pub mod matcher;
