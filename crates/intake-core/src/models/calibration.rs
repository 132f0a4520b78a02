use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::SectionType;

/// Calibration factors are bounded to a 2x swing in either direction.
pub const FACTOR_MIN: f64 = 0.5;
pub const FACTOR_MAX: f64 = 1.5;

/// Post-adjustment clamp for section pattern weights.
pub const SECTION_WEIGHT_MIN: f64 = 0.1;
pub const SECTION_WEIGHT_MAX: f64 = 0.95;

/// Post-adjustment clamp for contextual pattern weights.
pub const CONTEXT_WEIGHT_MIN: f64 = 0.1;
pub const CONTEXT_WEIGHT_MAX: f64 = 0.9;

/// A bounded multiplicative adjustment for one section's weights,
/// with the statistics that justified it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalibrationAdjustment {
    pub section_type: SectionType,
    pub factor: f64,
    pub detection_rate: f64,
    pub avg_confidence: f64,
}
