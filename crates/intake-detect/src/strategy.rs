//! The ordered literal-matching strategy table.
//!
//! Strategies run in fixed precedence — exact, prefix, with-separator,
//! standalone — and the first success decides the recorded match type.
//! Inputs are the normalized (trimmed, lowercased) line and literal.

use intake_core::models::MatchType;
use regex::Regex;

/// Per-literal compiled helpers for the separator and standalone
/// strategies. Built once when a rule set is compiled.
#[derive(Debug)]
pub struct LiteralRegexes {
    /// `^\d+\.?\s*<literal>` — numbered-list header form.
    pub numbered: Regex,
    /// `\b<literal>\b` — whole-token occurrence.
    pub standalone: Regex,
}

impl LiteralRegexes {
    pub fn compile(normalized_literal: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(normalized_literal);
        Ok(Self {
            numbered: Regex::new(&format!(r"^\d+\.?\s*{escaped}"))?,
            standalone: Regex::new(&format!(r"\b{escaped}\b"))?,
        })
    }
}

type Strategy = fn(&str, &str, &LiteralRegexes) -> bool;

/// The strategy table, in precedence order.
const STRATEGIES: [(MatchType, Strategy); 4] = [
    (MatchType::Exact, exact),
    (MatchType::Prefix, prefix),
    (MatchType::WithSeparator, with_separator),
    (MatchType::Standalone, standalone),
];

/// Evaluate one line against one literal, returning the match type of
/// the first strategy that succeeds. A single call per line/literal
/// pair means duplicates are never double-counted.
pub fn match_literal(line: &str, literal: &str, regexes: &LiteralRegexes) -> Option<MatchType> {
    STRATEGIES
        .iter()
        .find(|(_, strategy)| strategy(line, literal, regexes))
        .map(|(match_type, _)| *match_type)
}

fn exact(line: &str, literal: &str, _: &LiteralRegexes) -> bool {
    line == literal
}

fn prefix(line: &str, literal: &str, _: &LiteralRegexes) -> bool {
    line.starts_with(literal)
}

fn with_separator(line: &str, literal: &str, regexes: &LiteralRegexes) -> bool {
    line.starts_with(&format!("{literal}:"))
        || line.starts_with(&format!("{literal}-"))
        || line.starts_with(&format!("{literal} -"))
        || line.contains(&format!(": {literal}"))
        || regexes.numbered.is_match(line)
}

fn standalone(line: &str, _: &str, regexes: &LiteralRegexes) -> bool {
    regexes.standalone.is_match(line)
}
