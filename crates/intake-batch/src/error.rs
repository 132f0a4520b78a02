use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use intake_detect::DetectError;
use intake_patterns::error::PatternsError;

/// Fatal batch errors: anything that prevents the run from producing a
/// meaningful artifact aborts immediately with one of these.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("corpus directory not found: {}", path.display())]
    CorpusNotFound { path: PathBuf },

    #[error("no documents found in corpus: {}", path.display())]
    EmptyCorpus { path: PathBuf },

    #[error("validation summary not found: {}", path.display())]
    SummaryNotFound { path: PathBuf },

    #[error("pattern repository error: {0}")]
    Patterns(#[from] PatternsError),

    #[error("matcher compilation error: {0}")]
    Detect(#[from] DetectError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single document's failure. Recorded in the failure tally; never
/// aborts the batch.
#[derive(Debug, Error)]
pub enum DocumentFailure {
    #[error("text extraction timed out after {0:?}")]
    TimedOut(Duration),

    #[error("text extraction failed: {0}")]
    Extraction(String),
}
