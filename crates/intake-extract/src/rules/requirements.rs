//! Assessment-requirement bullet lists.
//!
//! Anchored multi-value extraction: find the requirements phrase, then
//! greedily take contiguous bullet lines until the shape breaks.

use std::sync::LazyLock;

use regex::Regex;

use intake_core::models::{ExtractedField, SectionType};

use crate::FieldRule;

use super::find_anchor;

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:assessment\s+requirements|services\s+requested|please\s+assess)\b")
        .expect("requirements ANCHOR regex is invalid")
});
static BULLET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[•\-\*]\s*(\S.*)$").expect("BULLET regex is invalid")
});

const BULLET_CONFIDENCE: f64 = 70.0;

pub struct RequirementsRule;

impl FieldRule for RequirementsRule {
    fn name(&self) -> &'static str {
        "requirements"
    }

    fn extract(&self, lines: &[&str]) -> Vec<ExtractedField> {
        let Some(anchor) = find_anchor(lines, &ANCHOR) else {
            return Vec::new();
        };

        let mut fields = Vec::new();
        let mut idx = anchor + 1;

        // Blank lines may separate the anchor from the first bullet.
        while idx < lines.len() && lines[idx].trim().is_empty() {
            idx += 1;
        }

        while idx < lines.len() {
            let Some(caps) = BULLET.captures(lines[idx].trim()) else {
                break;
            };
            if let Some(item) = caps.get(1) {
                fields.push(ExtractedField::new(
                    format!("requirement_{}", fields.len() + 1),
                    item.as_str().trim(),
                    BULLET_CONFIDENCE,
                    idx,
                    SectionType::AssessmentRequirements,
                ));
            }
            idx += 1;
        }

        fields
    }
}
