use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BatchError;

/// Enumerate the corpus: every `.txt` document in the directory,
/// sorted by path so runs are deterministic.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    if !dir.is_dir() {
        return Err(BatchError::CorpusNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut documents: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().is_some_and(|ext| ext == "txt")
        })
        .collect();
    documents.sort();

    if documents.is_empty() {
        return Err(BatchError::EmptyCorpus {
            path: dir.to_path_buf(),
        });
    }
    Ok(documents)
}

/// A document's identity in artifacts: its base name without extension.
pub fn document_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
