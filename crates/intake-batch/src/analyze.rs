//! The analysis tool: unlabeled-corpus statistics for pattern authoring.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use intake_core::models::SectionType;
use intake_detect::{detect_sections, ClueTally, CompiledRuleSet, DetectionOutcome};
use intake_patterns::RepositoryState;

use crate::artifact;
use crate::config::BatchConfig;
use crate::corpus;
use crate::error::BatchError;
use crate::pool::{self, DocumentWork};
use crate::source::{extract_text_bounded, TextSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCounts {
    pub total: usize,
    pub processed: usize,
    pub failed: usize,
}

/// How one section fared across the corpus: document counts, mean
/// detection confidence over found instances, and per-pattern hits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionAnalysis {
    pub found: usize,
    pub not_found: usize,
    pub confidence: f64,
    pub patterns: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub documents: DocumentCounts,
    pub sections: BTreeMap<SectionType, SectionAnalysis>,
    pub pattern_matches: BTreeMap<String, u64>,
    pub contextual_clues: ClueTally,
}

#[derive(Default)]
struct SectionAccumulator {
    found: usize,
    not_found: usize,
    confidence_sum: f64,
    patterns: BTreeMap<String, u64>,
}

/// Drive detection over an unlabeled corpus.
///
/// Writes one `<name>_patterns.json` per document plus
/// `analysis_summary.json`. A document failure increments the failure
/// counter and the batch continues.
pub async fn run_analysis(
    config: &BatchConfig,
    state: &RepositoryState,
    source: Arc<dyn TextSource>,
) -> Result<AnalysisSummary, BatchError> {
    let documents = corpus::list_documents(&config.corpus_dir)?;
    fs::create_dir_all(&config.output_dir)?;

    let rules = Arc::new(CompiledRuleSet::compile(state)?);
    let total = documents.len();
    info!(total, corpus = %config.corpus_dir.display(), "starting analysis run");

    let timeout = config.extraction_timeout;
    let work: DocumentWork<DetectionOutcome> = {
        let rules = Arc::clone(&rules);
        Arc::new(move |path: PathBuf| {
            let rules = Arc::clone(&rules);
            let source = Arc::clone(&source);
            Box::pin(async move {
                let text = extract_text_bounded(source.as_ref(), &path, timeout).await?;
                Ok(detect_sections(&text, &rules))
            })
        })
    };

    let mut rx = pool::dispatch(documents, config.concurrency, work);

    let mut processed = 0usize;
    let mut failed = 0usize;
    let mut accumulators: BTreeMap<SectionType, SectionAccumulator> = BTreeMap::new();
    let mut pattern_matches: BTreeMap<String, u64> = BTreeMap::new();
    let mut contextual_clues = ClueTally::default();

    while let Some(outcome) = rx.recv().await {
        match outcome.result {
            Ok(detection) => {
                let artifact_path = config
                    .output_dir
                    .join(format!("{}_patterns.json", outcome.document_id));
                artifact::write_json_atomic(&artifact_path, &detection.sections)?;

                for (section, section_match) in &detection.sections {
                    let acc = accumulators.entry(*section).or_default();
                    if section_match.found {
                        acc.found += 1;
                        acc.confidence_sum += section_match.confidence;
                        for line_match in &section_match.matches {
                            *acc.patterns.entry(line_match.pattern.clone()).or_insert(0) += 1;
                            *pattern_matches
                                .entry(line_match.pattern.clone())
                                .or_insert(0) += 1;
                        }
                    } else {
                        acc.not_found += 1;
                    }
                }
                contextual_clues.merge(detection.clues);

                processed += 1;
                info!(document = %outcome.document_id, "document analyzed");
            }
            Err(failure) => {
                failed += 1;
                warn!(document = %outcome.document_id, error = %failure, "document skipped");
            }
        }
    }

    let sections = accumulators
        .into_iter()
        .map(|(section, acc)| {
            let confidence = if acc.found > 0 {
                acc.confidence_sum / acc.found as f64
            } else {
                0.0
            };
            (
                section,
                SectionAnalysis {
                    found: acc.found,
                    not_found: acc.not_found,
                    confidence,
                    patterns: acc.patterns,
                },
            )
        })
        .collect();

    let summary = AnalysisSummary {
        documents: DocumentCounts {
            total,
            processed,
            failed,
        },
        sections,
        pattern_matches,
        contextual_clues,
    };

    artifact::write_json_atomic(&config.output_dir.join("analysis_summary.json"), &summary)?;
    info!(processed, failed, "analysis run complete");
    Ok(summary)
}
