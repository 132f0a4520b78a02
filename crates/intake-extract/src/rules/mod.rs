pub mod claim;
pub mod identity;
pub mod requirements;
pub mod schedule;

use intake_core::models::{ExtractedField, SectionType};
use regex::Regex;

/// Scan lines for the first hit of a labeled-capture regex and build a
/// field from capture group 1. Labeled captures are unambiguous, so
/// the first occurrence wins and later repeats are ignored.
pub(crate) fn first_labeled_capture(
    lines: &[&str],
    re: &Regex,
    name: &str,
    confidence: f64,
    section_type: SectionType,
) -> Option<ExtractedField> {
    for (idx, line) in lines.iter().enumerate() {
        if let Some(caps) = re.captures(line.trim()) {
            let value = caps.get(1)?.as_str().trim();
            if value.is_empty() {
                continue;
            }
            return Some(ExtractedField::new(
                name,
                value,
                confidence,
                idx,
                section_type,
            ));
        }
    }
    None
}

/// Index of the first line matching an anchor regex.
pub(crate) fn find_anchor(lines: &[&str], re: &Regex) -> Option<usize> {
    lines.iter().position(|line| re.is_match(line.trim()))
}
