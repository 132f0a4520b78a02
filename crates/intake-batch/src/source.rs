use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::time::Duration;

use crate::error::DocumentFailure;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The external text-extraction collaborator.
///
/// Implementations return a document's full text, pages concatenated
/// with a blank-line separator. The production implementation reads
/// pre-extracted `.txt` files; tests substitute failing or slow
/// sources.
pub trait TextSource: Send + Sync {
    fn extract_text<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<String, DocumentFailure>>;
}

/// Reads pre-extracted document text from disk.
pub struct FileTextSource;

impl TextSource for FileTextSource {
    fn extract_text<'a>(&'a self, path: &'a Path) -> BoxFuture<'a, Result<String, DocumentFailure>> {
        let path: PathBuf = path.to_path_buf();
        Box::pin(async move {
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| DocumentFailure::Extraction(e.to_string()))
        })
    }
}

/// Extraction bounded by a timeout. A slow document is a recorded
/// failure, not a hung batch.
pub async fn extract_text_bounded(
    source: &dyn TextSource,
    path: &Path,
    timeout: Duration,
) -> Result<String, DocumentFailure> {
    match tokio::time::timeout(timeout, source.extract_text(path)).await {
        Ok(result) => result,
        Err(_) => Err(DocumentFailure::TimedOut(timeout)),
    }
}
