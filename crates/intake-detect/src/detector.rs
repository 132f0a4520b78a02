use std::collections::{BTreeMap, BTreeSet};

use regex::{Regex, RegexBuilder};

use intake_core::models::{
    ContextPosition, LineMatch, Matcher, MatchType, SectionMatch, SectionType,
};
use intake_patterns::RepositoryState;

use crate::clues::ClueTally;
use crate::error::DetectError;
use crate::strategy::{match_literal, LiteralRegexes};

/// Everything one detection run produces: per-section match results
/// plus the adjacent-line clue tally.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionOutcome {
    pub sections: BTreeMap<SectionType, SectionMatch>,
    pub clues: ClueTally,
}

enum CompiledKind {
    Literal {
        normalized: String,
        regexes: LiteralRegexes,
    },
    Regex(Regex),
}

impl CompiledKind {
    fn compile(
        section: SectionType,
        matcher: &Matcher,
    ) -> Result<Self, DetectError> {
        let invalid = |source| DetectError::InvalidMatcher {
            section,
            matcher: matcher.as_str().to_string(),
            source,
        };
        match matcher {
            Matcher::Literal(text) => {
                let normalized = text.trim().to_lowercase();
                let regexes = LiteralRegexes::compile(&normalized).map_err(invalid)?;
                Ok(CompiledKind::Literal {
                    normalized,
                    regexes,
                })
            }
            Matcher::Regex(source_text) => {
                let re = RegexBuilder::new(source_text)
                    .case_insensitive(true)
                    .build()
                    .map_err(invalid)?;
                Ok(CompiledKind::Regex(re))
            }
        }
    }

    /// Evaluate one trimmed line (plus its normalized form) against
    /// this matcher.
    fn eval(&self, trimmed: &str, normalized: &str) -> Option<MatchType> {
        match self {
            CompiledKind::Literal {
                normalized: literal,
                regexes,
            } => match_literal(normalized, literal, regexes),
            CompiledKind::Regex(re) => re.is_match(trimmed).then_some(MatchType::Pattern),
        }
    }
}

struct CompiledRule {
    display: String,
    weight: f64,
    kind: CompiledKind,
}

struct CompiledContextRule {
    position: ContextPosition,
    weight: f64,
    kind: CompiledKind,
}

struct CompiledSection {
    rules: Vec<CompiledRule>,
    contextual: Vec<CompiledContextRule>,
}

/// A pattern snapshot with every matcher compiled, ready for any
/// number of detection runs. Immutable once built, so concurrent
/// per-document detections share it freely.
pub struct CompiledRuleSet {
    sections: Vec<(SectionType, CompiledSection)>,
}

impl CompiledRuleSet {
    pub fn compile(state: &RepositoryState) -> Result<Self, DetectError> {
        let mut sections = Vec::with_capacity(state.sections.len());
        for (&section, entry) in &state.sections {
            let mut rules = Vec::with_capacity(entry.patterns.len());
            for pattern in &entry.patterns {
                rules.push(CompiledRule {
                    display: pattern.matcher.as_str().to_string(),
                    weight: pattern.confidence_weight,
                    kind: CompiledKind::compile(section, &pattern.matcher)?,
                });
            }
            let mut contextual = Vec::with_capacity(entry.contextual.len());
            for ctx in &entry.contextual {
                contextual.push(CompiledContextRule {
                    position: ctx.position,
                    weight: ctx.confidence_weight,
                    kind: CompiledKind::compile(section, &ctx.matcher)?,
                });
            }
            sections.push((section, CompiledSection { rules, contextual }));
        }
        tracing::debug!(sections = sections.len(), "rule set compiled");
        Ok(Self { sections })
    }

    pub fn section_types(&self) -> impl Iterator<Item = SectionType> + '_ {
        self.sections.iter().map(|(s, _)| *s)
    }
}

/// Run section detection over one document's text.
///
/// Pure function of its inputs: identical (text, rule set) pairs yield
/// identical outcomes. Aggregate confidence per section is the maximum
/// weight among matched patterns — strong single evidence is neither
/// diluted nor inflated by corroborating matches.
pub fn detect_sections(text: &str, rules: &CompiledRuleSet) -> DetectionOutcome {
    let lines: Vec<&str> = text.lines().collect();
    let trimmed: Vec<&str> = lines.iter().map(|l| l.trim()).collect();
    let normalized: Vec<String> = trimmed.iter().map(|l| l.to_lowercase()).collect();

    let mut sections = BTreeMap::new();
    let mut clues = ClueTally::default();

    for (section, compiled) in &rules.sections {
        let mut matches = Vec::new();
        let mut positions = BTreeSet::new();
        let mut confidence: f64 = 0.0;

        for rule in &compiled.rules {
            for idx in 0..lines.len() {
                if normalized[idx].is_empty() {
                    continue;
                }
                if let Some(match_type) = rule.kind.eval(trimmed[idx], &normalized[idx]) {
                    matches.push(LineMatch {
                        line: trimmed[idx].to_string(),
                        pattern: rule.display.clone(),
                        match_type,
                    });
                    positions.insert(idx);
                    confidence = confidence.max(rule.weight);
                }
            }
        }

        // Adjacent non-empty lines: clue tally for every matched line,
        // and contextual-pattern evidence folded into the confidence max.
        for &idx in &positions {
            let before = prev_non_empty(&trimmed, idx);
            let after = next_non_empty(&trimmed, idx);

            if let Some(b) = before {
                clues.record(*section, trimmed[b]);
            }
            if let Some(a) = after {
                clues.record(*section, trimmed[a]);
            }

            for ctx in &compiled.contextual {
                let neighbor = match ctx.position {
                    ContextPosition::Before => before,
                    ContextPosition::After => after,
                };
                if let Some(n) = neighbor
                    && ctx.kind.eval(trimmed[n], &normalized[n]).is_some()
                {
                    confidence = confidence.max(ctx.weight);
                }
            }
        }

        let found = !matches.is_empty();
        sections.insert(
            *section,
            SectionMatch {
                section_type: *section,
                found,
                positions: positions.into_iter().collect(),
                matches,
                confidence: if found { confidence } else { 0.0 },
            },
        );
    }

    DetectionOutcome { sections, clues }
}

fn prev_non_empty(trimmed: &[&str], idx: usize) -> Option<usize> {
    (0..idx).rev().find(|&i| !trimmed[i].is_empty())
}

fn next_non_empty(trimmed: &[&str], idx: usize) -> Option<usize> {
    (idx + 1..trimmed.len()).find(|&i| !trimmed[i].is_empty())
}
