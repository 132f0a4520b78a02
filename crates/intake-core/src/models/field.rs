use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::SectionType;

/// A typed field pulled out of document text.
///
/// `confidence` is the 0–100 scale the web forms display; pattern
/// weights (0–1) are a separate scale and the two are never compared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExtractedField {
    pub name: String,
    pub value: String,
    pub confidence: f64,
    pub source_line: usize,
    pub section_type: SectionType,
}

impl ExtractedField {
    /// Build a field, clamping confidence into `[0, 100]`.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        confidence: f64,
        source_line: usize,
        section_type: SectionType,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            confidence: confidence.clamp(0.0, 100.0),
            source_line,
            section_type,
        }
    }
}
