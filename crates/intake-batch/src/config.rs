use std::path::PathBuf;
use std::time::Duration;

use intake_core::models::SectionType;

pub const DEFAULT_CONCURRENCY: usize = 4;
pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_DOCUMENT_PASS_THRESHOLD: f64 = 0.6;
pub const DEFAULT_AGGREGATE_PASS_THRESHOLD: f64 = 0.7;

/// Shared settings for any batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub corpus_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Bounded worker pool size.
    pub concurrency: usize,
    /// Upper bound on one document's text extraction.
    pub extraction_timeout: Duration,
}

impl BatchConfig {
    pub fn new(corpus_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            corpus_dir: corpus_dir.into(),
            output_dir: output_dir.into(),
            concurrency: DEFAULT_CONCURRENCY,
            extraction_timeout: DEFAULT_EXTRACTION_TIMEOUT,
        }
    }
}

/// Settings for a validation harness run.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub batch: BatchConfig,
    /// The sections every corpus document is expected to contain.
    pub expected_sections: Vec<SectionType>,
    /// Per-document pass bar: found / expected.
    pub document_pass_threshold: f64,
    /// Corpus pass bar: passed / validated.
    pub aggregate_pass_threshold: f64,
    /// Cost-control cap on validated documents.
    pub max_documents: Option<usize>,
}

impl ValidationConfig {
    pub fn new(batch: BatchConfig) -> Self {
        Self {
            batch,
            expected_sections: SectionType::ALL.to_vec(),
            document_pass_threshold: DEFAULT_DOCUMENT_PASS_THRESHOLD,
            aggregate_pass_threshold: DEFAULT_AGGREGATE_PASS_THRESHOLD,
            max_documents: None,
        }
    }
}
