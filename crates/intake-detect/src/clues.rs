use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use intake_core::models::SectionType;

/// Lines adjacent to detected section headers, tallied per section.
///
/// Diagnostic output only — the analysis tool persists it for pattern
/// authoring; it never feeds detection-time confidence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClueTally(pub BTreeMap<SectionType, BTreeMap<String, u64>>);

impl ClueTally {
    pub fn record(&mut self, section: SectionType, line: &str) {
        let normalized = line.trim().to_lowercase();
        if normalized.is_empty() {
            return;
        }
        *self
            .0
            .entry(section)
            .or_default()
            .entry(normalized)
            .or_insert(0) += 1;
    }

    /// Fold another tally into this one (batch aggregation).
    pub fn merge(&mut self, other: ClueTally) {
        for (section, lines) in other.0 {
            let entry = self.0.entry(section).or_default();
            for (line, count) in lines {
                *entry.entry(line).or_insert(0) += count;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
