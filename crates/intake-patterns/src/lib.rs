//! intake-patterns
//!
//! The versioned pattern store: a structured JSON document mapping each
//! section to its ordered direct and contextual pattern lists. Load,
//! save, and replace-with-backup — nothing in the store is executable.

pub mod defaults;
pub mod error;
pub mod repository;

pub use repository::{PatternRepository, RepositoryState, SectionPatterns};
