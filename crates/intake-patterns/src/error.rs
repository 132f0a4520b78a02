use std::path::PathBuf;

use intake_core::models::SectionType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternsError {
    #[error("pattern repository not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("pattern repository unreadable: {0}")]
    Parse(String),

    #[error("weight {weight} out of range [0, 1] for {section} pattern {matcher:?}")]
    WeightOutOfRange {
        section: SectionType,
        matcher: String,
        weight: f64,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
