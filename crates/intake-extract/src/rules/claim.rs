//! Claim/file identifiers from labeled lines.

use std::sync::LazyLock;

use regex::Regex;

use intake_core::models::{ExtractedField, SectionType};

use crate::FieldRule;

use super::first_labeled_capture;

static DATE_OF_LOSS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^date\s+of\s+(?:loss|accident|injury)\s*[:\-]\s*(\S.*)$")
        .expect("DATE_OF_LOSS regex is invalid")
});
static CLAIM_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^claim\s*(?:number|no\.?|#)\s*[:\-]\s*(\S.*)$")
        .expect("CLAIM_NUMBER regex is invalid")
});
static FILE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:our\s+)?(?:file|reference)\s*(?:number|no\.?|#)?\s*[:\-]\s*(\S.*)$")
        .expect("FILE_NUMBER regex is invalid")
});
static POLICY_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^policy\s*(?:number|no\.?|#)?\s*[:\-]\s*(\S.*)$")
        .expect("POLICY_NUMBER regex is invalid")
});
static INSURER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:insurer|insurance\s+company)\s*[:\-]\s*(\S.*)$")
        .expect("INSURER regex is invalid")
});
static ADJUSTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:adjuster|case\s+manager)\s*[:\-]\s*(\S.*)$")
        .expect("ADJUSTER regex is invalid")
});

pub struct ClaimRule;

impl FieldRule for ClaimRule {
    fn name(&self) -> &'static str {
        "claim"
    }

    fn extract(&self, lines: &[&str]) -> Vec<ExtractedField> {
        let section = SectionType::Demographics;
        [
            first_labeled_capture(lines, &DATE_OF_LOSS, "date_of_loss", 95.0, section),
            first_labeled_capture(lines, &CLAIM_NUMBER, "claim_number", 95.0, section),
            first_labeled_capture(lines, &FILE_NUMBER, "file_number", 90.0, section),
            first_labeled_capture(lines, &POLICY_NUMBER, "policy_number", 90.0, section),
            first_labeled_capture(lines, &INSURER, "insurer", 85.0, section),
            first_labeled_capture(lines, &ADJUSTER, "adjuster", 85.0, section),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
