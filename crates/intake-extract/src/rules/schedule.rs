//! Schedule tables: rows split on multi-space gaps.
//!
//! Referral schedules arrive as loose column layouts
//! (`May 3, 2024    10:00 AM    Client home`). A row needs at least
//! three columns to be trusted; partial rows are skipped silently so
//! malformed input degrades to "field absent", never to garbage.

use std::sync::LazyLock;

use regex::Regex;

use intake_core::models::{ExtractedField, SectionType};

use crate::FieldRule;

use super::find_anchor;

static ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bschedule\b").expect("schedule ANCHOR regex is invalid")
});
static COLUMN_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}|\t").expect("COLUMN_GAP regex is invalid"));

const MIN_COLUMNS: usize = 3;
const ROW_CONFIDENCE: f64 = 60.0;

pub struct ScheduleRule;

impl FieldRule for ScheduleRule {
    fn name(&self) -> &'static str {
        "schedule"
    }

    fn extract(&self, lines: &[&str]) -> Vec<ExtractedField> {
        let Some(anchor) = find_anchor(lines, &ANCHOR) else {
            return Vec::new();
        };

        let mut fields = Vec::new();
        let mut idx = anchor + 1;

        while idx < lines.len() && lines[idx].trim().is_empty() {
            idx += 1;
        }

        let mut row_number = 0;
        while idx < lines.len() {
            let line = lines[idx].trim();
            if line.is_empty() {
                break;
            }

            let columns: Vec<&str> = COLUMN_GAP
                .split(line)
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .collect();

            match columns.len() {
                0 | 1 => break,
                n if n < MIN_COLUMNS => {
                    // Partial row: still table-shaped, but not enough
                    // columns to produce a trustworthy field.
                    tracing::debug!(line = idx, columns = n, "skipping partial schedule row");
                }
                _ => {
                    row_number += 1;
                    fields.push(ExtractedField::new(
                        format!("schedule_row_{row_number}"),
                        columns.join(" | "),
                        ROW_CONFIDENCE,
                        idx,
                        SectionType::Schedule,
                    ));
                }
            }
            idx += 1;
        }

        fields
    }
}
