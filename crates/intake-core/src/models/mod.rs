pub mod calibration;
pub mod field;
pub mod pattern;
pub mod section;
pub mod section_match;
pub mod validation;

pub use calibration::CalibrationAdjustment;
pub use field::ExtractedField;
pub use pattern::{weight_in_bounds, ContextPosition, ContextualPattern, Matcher, Pattern, PatternTier};
pub use section::SectionType;
pub use section_match::{LineMatch, MatchType, SectionMatch};
pub use validation::{
    SectionDetectionTotals, SectionOutcome, SectionValidationStats, ValidationRecord,
    ValidationSummary,
};
