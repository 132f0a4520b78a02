//! intake-core
//!
//! Pure domain types for the intake section-detection engine.
//! No I/O — this is the shared vocabulary of the intake system,
//! exported to the web forms via ts-rs.

pub mod error;
pub mod models;
