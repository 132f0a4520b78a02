//! The calibration engine: bounded weight adjustment from validation
//! statistics, with an unconditional timestamped backup.

use std::path::{Path, PathBuf};

use tracing::info;

use intake_core::models::calibration::{
    CalibrationAdjustment, CONTEXT_WEIGHT_MAX, CONTEXT_WEIGHT_MIN, FACTOR_MAX, FACTOR_MIN,
    SECTION_WEIGHT_MAX, SECTION_WEIGHT_MIN,
};
use intake_core::models::{SectionType, SectionValidationStats, ValidationSummary};
use intake_patterns::{PatternRepository, RepositoryState};

use crate::error::BatchError;

/// What a calibration run did: the per-section factors and where the
/// prior repository state was backed up.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationOutcome {
    pub adjustments: Vec<CalibrationAdjustment>,
    pub backup_path: PathBuf,
}

/// Derive one section's bounded adjustment factor.
///
/// A detection rate well above the average confidence means the
/// patterns under-trust a strong real-world signal (boost); the
/// reverse means they over-trust a weak one (reduce); small gaps get a
/// proportional nudge. A zero detection rate is never amplified.
pub fn compute_adjustment(
    section_type: SectionType,
    stats: &SectionValidationStats,
) -> CalibrationAdjustment {
    let rate = stats.detection_rate;
    let confidence = stats.avg_confidence;

    let factor = if rate == 0.0 {
        1.0
    } else if rate > confidence + 0.2 {
        1.2
    } else if confidence > rate + 0.2 {
        0.8
    } else {
        1.0 + (rate - confidence) / 2.0
    };

    CalibrationAdjustment {
        section_type,
        factor: factor.clamp(FACTOR_MIN, FACTOR_MAX),
        detection_rate: rate,
        avg_confidence: confidence,
    }
}

/// Factors for every section the summary has real expectations for.
pub fn compute_adjustments(summary: &ValidationSummary) -> Vec<CalibrationAdjustment> {
    summary
        .sections
        .iter()
        .filter(|(_, stats)| stats.expected > 0)
        .map(|(&section, stats)| compute_adjustment(section, stats))
        .collect()
}

/// Apply factors multiplicatively to the section's pattern weights,
/// clamping into the documented bounds.
pub fn apply_adjustments(state: &mut RepositoryState, adjustments: &[CalibrationAdjustment]) {
    for adjustment in adjustments {
        let Some(entry) = state.sections.get_mut(&adjustment.section_type) else {
            continue;
        };
        for pattern in &mut entry.patterns {
            pattern.confidence_weight = (pattern.confidence_weight * adjustment.factor)
                .clamp(SECTION_WEIGHT_MIN, SECTION_WEIGHT_MAX);
            debug_assert!((0.0..=1.0).contains(&pattern.confidence_weight));
        }
        for contextual in &mut entry.contextual {
            contextual.confidence_weight = (contextual.confidence_weight * adjustment.factor)
                .clamp(CONTEXT_WEIGHT_MIN, CONTEXT_WEIGHT_MAX);
            debug_assert!((0.0..=1.0).contains(&contextual.confidence_weight));
        }
    }
}

/// Read the most recent validation summary from disk.
pub fn read_validation_summary(path: &Path) -> Result<ValidationSummary, BatchError> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(BatchError::SummaryNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_slice(&bytes)?)
}

/// Run a full calibration pass: load the live repository, adjust every
/// section's weights, back up the prior state, and write the new one.
///
/// The backup precedes every overwrite without exception, so the chain
/// of calibration history stays recoverable across repeated runs.
pub fn run_calibration(
    repository: &PatternRepository,
    summary: &ValidationSummary,
) -> Result<CalibrationOutcome, BatchError> {
    let mut state = repository.load()?;

    let adjustments = compute_adjustments(summary);
    apply_adjustments(&mut state, &adjustments);

    let backup_path = repository.replace_with_backup(&state)?;

    for adjustment in &adjustments {
        info!(
            section = %adjustment.section_type,
            factor = adjustment.factor,
            detection_rate = adjustment.detection_rate,
            avg_confidence = adjustment.avg_confidence,
            "section weights adjusted"
        );
    }
    info!(backup = %backup_path.display(), "calibration complete");

    Ok(CalibrationOutcome {
        adjustments,
        backup_path,
    })
}
