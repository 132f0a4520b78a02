//! intake-extract
//!
//! Typed field extraction. One rule-set per field domain, each running
//! targeted regexes over the full document text — headers and content
//! are often non-adjacent in poorly structured referrals, so rules are
//! never limited to detected section boundaries.
//!
//! Rules don't fail: a candidate that can't be parsed into a
//! well-formed value is omitted, never emitted as garbage.

pub mod rules;

use intake_core::models::ExtractedField;

/// Trait implemented by each field-extraction rule set.
pub trait FieldRule: Send + Sync {
    /// Rule-set identifier (e.g. "identity", "schedule").
    fn name(&self) -> &'static str;

    /// Extract zero or more fields from the document's lines.
    fn extract(&self, lines: &[&str]) -> Vec<ExtractedField>;
}

/// Every registered rule set, in extraction order.
pub fn rules() -> Vec<Box<dyn FieldRule>> {
    vec![
        Box::new(rules::identity::IdentityRule),
        Box::new(rules::claim::ClaimRule),
        Box::new(rules::requirements::RequirementsRule),
        Box::new(rules::schedule::ScheduleRule),
    ]
}

/// Run every rule set over one document's text.
pub fn extract_fields(text: &str) -> Vec<ExtractedField> {
    let lines: Vec<&str> = text.lines().collect();
    let mut fields = Vec::new();
    for rule in rules() {
        let extracted = rule.extract(&lines);
        tracing::debug!(rule = rule.name(), count = extracted.len(), "fields extracted");
        fields.extend(extracted);
    }
    fields
}
