use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a pattern matches a line of document text.
///
/// A literal participates in the four ordered matching strategies;
/// a regex is applied verbatim (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Matcher {
    Literal(String),
    Regex(String),
}

impl Matcher {
    /// The raw matcher text, as recorded in match provenance and
    /// pattern-frequency tallies.
    pub fn as_str(&self) -> &str {
        match self {
            Matcher::Literal(s) | Matcher::Regex(s) => s,
        }
    }
}

/// Strength class of a pattern, independent of its numeric weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatternTier {
    Strong,
    Context,
    Weak,
}

/// A section-detection rule: matcher + tier + confidence weight.
///
/// Weights stay in `[0, 1]`; only the calibration engine rewrites them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Pattern {
    pub matcher: Matcher,
    pub tier: PatternTier,
    pub confidence_weight: f64,
}

/// Where contextual text is expected relative to a section header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ContextPosition {
    Before,
    After,
}

/// A pattern for text adjacent to a section header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ContextualPattern {
    pub matcher: Matcher,
    pub position: ContextPosition,
    pub confidence_weight: f64,
}

/// Whether a stored pattern weight is within the documented `[0, 1]` range.
pub fn weight_in_bounds(weight: f64) -> bool {
    (0.0..=1.0).contains(&weight)
}
