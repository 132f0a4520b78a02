//! Client identity fields from labeled lines.

use std::sync::LazyLock;

use regex::Regex;

use intake_core::models::{ExtractedField, SectionType};

use crate::FieldRule;

use super::first_labeled_capture;

static CLIENT_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:client|claimant)(?:\s+name)?\s*[:\-]\s*(\S.*)$")
        .expect("CLIENT_NAME regex is invalid")
});
static BARE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^name\s*[:\-]\s*(\S.*)$").expect("BARE_NAME regex is invalid")
});
static DATE_OF_BIRTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:date\s+of\s+birth|dob|d\.o\.b\.?)\s*[:\-]\s*(\S.*)$")
        .expect("DATE_OF_BIRTH regex is invalid")
});
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^address\s*[:\-]\s*(\S.*)$").expect("ADDRESS regex is invalid")
});
static TELEPHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:telephone|phone|tel)(?:\s+(?:number|no\.?))?\s*[:\-]\s*(\S.*)$")
        .expect("TELEPHONE regex is invalid")
});

pub struct IdentityRule;

impl FieldRule for IdentityRule {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn extract(&self, lines: &[&str]) -> Vec<ExtractedField> {
        let section = SectionType::Demographics;
        let mut fields = Vec::new();

        // "Client:"/"Claimant:" outranks a bare "Name:" label.
        let client_name = first_labeled_capture(lines, &CLIENT_NAME, "client_name", 92.0, section)
            .or_else(|| first_labeled_capture(lines, &BARE_NAME, "client_name", 85.0, section));
        fields.extend(client_name);

        fields.extend(first_labeled_capture(
            lines,
            &DATE_OF_BIRTH,
            "date_of_birth",
            95.0,
            section,
        ));
        fields.extend(first_labeled_capture(
            lines, &ADDRESS, "address", 88.0, section,
        ));
        fields.extend(first_labeled_capture(
            lines, &TELEPHONE, "telephone", 88.0, section,
        ));

        fields
    }
}
