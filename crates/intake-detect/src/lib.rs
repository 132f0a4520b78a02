//! intake-detect
//!
//! The section detector: a pure function of (document text, pattern
//! snapshot) producing per-section match results and a contextual-clue
//! tally. Matchers compile once per run into a `CompiledRuleSet`;
//! nothing here mutates the pattern store.

pub mod clues;
pub mod detector;
pub mod error;
pub mod strategy;

pub use clues::ClueTally;
pub use detector::{detect_sections, CompiledRuleSet, DetectionOutcome};
pub use error::DetectError;
