use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::SectionType;

/// Expected/found status of one section in one validated document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionOutcome {
    pub expected: bool,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Validation result for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValidationRecord {
    pub document_id: String,
    pub expected_sections: Vec<SectionType>,
    pub found_sections: usize,
    pub missed_sections: usize,
    pub unexpected_sections: usize,
    pub sections: BTreeMap<SectionType, SectionOutcome>,
    pub passed: bool,
}

/// Corpus-wide expected-section detection counts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionDetectionTotals {
    pub total: usize,
    pub found: usize,
    pub not_found: usize,
    pub detection_rate: f64,
}

/// Per-section aggregate statistics over a validation corpus.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionValidationStats {
    pub expected: usize,
    pub found: usize,
    pub missed: usize,
    pub detection_rate: f64,
    pub avg_confidence: f64,
}

/// Aggregate verdict over a validation corpus. The calibration engine
/// reads `sections` to derive its adjustment factors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValidationSummary {
    pub total_documents: usize,
    pub passed_documents: usize,
    pub failed_documents: usize,
    pub section_detection: SectionDetectionTotals,
    pub sections: BTreeMap<SectionType, SectionValidationStats>,
}
