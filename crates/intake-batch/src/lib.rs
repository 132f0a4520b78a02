//! intake-batch
//!
//! Batch drivers over a document corpus: the analysis tool (pattern
//! authoring statistics), the validation harness (detection accuracy
//! against labeled expectations), and the calibration engine (bounded
//! weight adjustment with backup).
//!
//! Per-document work runs on a bounded worker pool; one aggregator
//! loop owns all mutable accumulation and all artifact writes, so two
//! documents never interleave writes to the same file.

pub mod analyze;
pub mod artifact;
pub mod calibrate;
pub mod config;
pub mod corpus;
pub mod error;
pub mod pool;
pub mod source;
pub mod validate;

pub use config::{BatchConfig, ValidationConfig};
pub use error::{BatchError, DocumentFailure};
pub use source::{FileTextSource, TextSource};
