use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::section::SectionType;

/// Which strategy produced a line match.
///
/// The four named strategies apply to literal matchers in priority
/// order; `Pattern` marks a hit from an explicit regex matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum MatchType {
    Exact,
    Prefix,
    WithSeparator,
    Standalone,
    Pattern,
}

/// One matched line: the trimmed line text, the matcher that fired,
/// and the strategy that matched it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineMatch {
    pub line: String,
    pub pattern: String,
    pub match_type: MatchType,
}

/// The detection result for one section of one document.
///
/// `positions` holds ascending, deduplicated line indices;
/// `confidence` is the maximum weight among matched patterns.
/// Created fresh per detection run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SectionMatch {
    pub section_type: SectionType,
    pub found: bool,
    pub positions: Vec<usize>,
    pub matches: Vec<LineMatch>,
    pub confidence: f64,
}

impl SectionMatch {
    /// An empty (not-found) result for a section.
    pub fn not_found(section_type: SectionType) -> Self {
        Self {
            section_type,
            found: false,
            positions: Vec::new(),
            matches: Vec::new(),
            confidence: 0.0,
        }
    }
}
