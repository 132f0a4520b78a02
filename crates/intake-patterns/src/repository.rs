use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use intake_core::models::{weight_in_bounds, ContextualPattern, Pattern, SectionType};

use crate::error::PatternsError;

/// Direct and contextual pattern lists for one section, in stored order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPatterns {
    pub patterns: Vec<Pattern>,
    pub contextual: Vec<ContextualPattern>,
}

/// The full persisted pattern set. Detection runs take an owned clone
/// as their immutable snapshot; only calibration writes a new state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryState {
    pub version: u32,
    pub sections: BTreeMap<SectionType, SectionPatterns>,
}

impl RepositoryState {
    /// Check every stored weight against the `[0, 1]` invariant.
    pub fn validate(&self) -> Result<(), PatternsError> {
        for (&section, entry) in &self.sections {
            for p in &entry.patterns {
                if !weight_in_bounds(p.confidence_weight) {
                    return Err(PatternsError::WeightOutOfRange {
                        section,
                        matcher: p.matcher.as_str().to_string(),
                        weight: p.confidence_weight,
                    });
                }
            }
            for c in &entry.contextual {
                if !weight_in_bounds(c.confidence_weight) {
                    return Err(PatternsError::WeightOutOfRange {
                        section,
                        matcher: c.matcher.as_str().to_string(),
                        weight: c.confidence_weight,
                    });
                }
            }
        }
        Ok(())
    }
}

/// File-backed pattern store with timestamped backups.
pub struct PatternRepository {
    path: PathBuf,
    backup_dir: PathBuf,
}

impl PatternRepository {
    pub fn new(path: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup_dir: backup_dir.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the live pattern document.
    ///
    /// A missing file is `NotFound` — callers that need patterns treat
    /// this as fatal, since detection without patterns is meaningless.
    pub fn load(&self) -> Result<RepositoryState, PatternsError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PatternsError::NotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        let state: RepositoryState =
            serde_json::from_slice(&bytes).map_err(|e| PatternsError::Parse(e.to_string()))?;
        state.validate()?;

        debug!(
            path = %self.path.display(),
            version = state.version,
            sections = state.sections.len(),
            "pattern repository loaded"
        );
        Ok(state)
    }

    /// Write the state atomically (tmp + rename). The live document is
    /// never left partially written.
    pub fn save(&self, state: &RepositoryState) -> Result<(), PatternsError> {
        state.validate()?;

        let json = serde_json::to_vec_pretty(state)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!(path = %self.path.display(), "pattern repository saved");
        Ok(())
    }

    /// Copy the current live document to a timestamped backup, then
    /// atomically overwrite it with `state`. Returns the backup path.
    ///
    /// The backup step is unconditional so repeated calibrations leave
    /// a recoverable chain of prior states.
    pub fn replace_with_backup(
        &self,
        state: &RepositoryState,
    ) -> Result<PathBuf, PatternsError> {
        if !self.path.exists() {
            return Err(PatternsError::NotFound {
                path: self.path.clone(),
            });
        }

        fs::create_dir_all(&self.backup_dir)?;
        let backup_path = self.backup_dir.join(backup_file_name(jiff::Timestamp::now()));
        fs::copy(&self.path, &backup_path)?;

        info!(backup = %backup_path.display(), "pattern repository backed up");

        self.save(state)?;
        Ok(backup_path)
    }
}

/// Backup file name carrying a filesystem-safe ISO-8601 timestamp.
///
/// Nanosecond precision keeps back-to-back calibration runs from
/// colliding on the same name.
pub fn backup_file_name(now: jiff::Timestamp) -> String {
    let stamp: String = now
        .to_string()
        .chars()
        .map(|c| if c == ':' { '-' } else { c })
        .collect();
    format!("patterns_backup_{stamp}.json")
}
