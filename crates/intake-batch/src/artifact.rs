use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::BatchError;

/// Write a JSON artifact atomically (tmp + rename) so a cancelled or
/// failed run never leaves a partially written file behind.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), BatchError> {
    let json = serde_json::to_vec_pretty(value)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
