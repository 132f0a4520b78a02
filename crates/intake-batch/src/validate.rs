//! The validation harness: detection accuracy against a labeled corpus.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info, warn};

use intake_core::models::{
    SectionDetectionTotals, SectionMatch, SectionOutcome, SectionType, SectionValidationStats,
    ValidationRecord, ValidationSummary,
};
use intake_detect::{detect_sections, CompiledRuleSet, DetectionOutcome};
use intake_extract::extract_fields;
use intake_patterns::RepositoryState;

use crate::artifact;
use crate::config::ValidationConfig;
use crate::corpus;
use crate::error::BatchError;
use crate::pool::{self, DocumentWork};
use crate::source::{extract_text_bounded, TextSource};

/// Everything a validation run produced. `passed` is the aggregate
/// verdict the process exit status reflects.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub records: Vec<ValidationRecord>,
    pub summary: ValidationSummary,
    pub passed: bool,
}

/// Compare one document's detection against the expected section list.
///
/// Detected-but-unexpected sections are tracked, not penalized.
pub fn evaluate_document(
    document_id: &str,
    detected: &BTreeMap<SectionType, SectionMatch>,
    expected: &[SectionType],
    pass_threshold: f64,
) -> ValidationRecord {
    let mut sections = BTreeMap::new();
    let mut found_sections = 0usize;

    for &section in expected {
        let section_match = detected.get(&section);
        let found = section_match.is_some_and(|m| m.found);
        if found {
            found_sections += 1;
        }
        sections.insert(
            section,
            SectionOutcome {
                expected: true,
                found,
                confidence: section_match.filter(|m| m.found).map(|m| m.confidence),
            },
        );
    }

    let mut unexpected_sections = 0usize;
    for (section, section_match) in detected {
        if section_match.found && !expected.contains(section) {
            unexpected_sections += 1;
            sections.insert(
                *section,
                SectionOutcome {
                    expected: false,
                    found: true,
                    confidence: Some(section_match.confidence),
                },
            );
        }
    }

    let missed_sections = expected.len() - found_sections;
    let passed = expected.is_empty()
        || (found_sections as f64 / expected.len() as f64) >= pass_threshold;

    ValidationRecord {
        document_id: document_id.to_string(),
        expected_sections: expected.to_vec(),
        found_sections,
        missed_sections,
        unexpected_sections,
        sections,
        passed,
    }
}

/// Aggregate per-document records into corpus statistics.
pub fn summarize(records: &[ValidationRecord], expected: &[SectionType]) -> ValidationSummary {
    let total_documents = records.len();
    let passed_documents = records.iter().filter(|r| r.passed).count();

    let mut sections = BTreeMap::new();
    for &section in expected {
        let mut found = 0usize;
        let mut confidence_samples = Vec::new();
        for record in records {
            if let Some(outcome) = record.sections.get(&section)
                && outcome.found
            {
                found += 1;
                if let Some(confidence) = outcome.confidence {
                    confidence_samples.push(confidence);
                }
            }
        }
        let expected_count = total_documents;
        let detection_rate = if expected_count > 0 {
            found as f64 / expected_count as f64
        } else {
            0.0
        };
        let avg_confidence = if confidence_samples.is_empty() {
            0.0
        } else {
            confidence_samples.iter().sum::<f64>() / confidence_samples.len() as f64
        };
        sections.insert(
            section,
            SectionValidationStats {
                expected: expected_count,
                found,
                missed: expected_count - found,
                detection_rate,
                avg_confidence,
            },
        );
    }

    let section_total = total_documents * expected.len();
    let section_found: usize = records.iter().map(|r| r.found_sections).sum();
    let section_detection = SectionDetectionTotals {
        total: section_total,
        found: section_found,
        not_found: section_total - section_found,
        detection_rate: if section_total > 0 {
            section_found as f64 / section_total as f64
        } else {
            0.0
        },
    };

    ValidationSummary {
        total_documents,
        passed_documents,
        failed_documents: total_documents - passed_documents,
        section_detection,
        sections,
    }
}

struct ValidatedDocument {
    detection: DetectionOutcome,
    field_count: usize,
}

/// Drive detection + extraction over a labeled corpus and persist the
/// per-document records and the aggregate summary.
pub async fn run_validation(
    config: &ValidationConfig,
    state: &RepositoryState,
    source: Arc<dyn TextSource>,
) -> Result<ValidationReport, BatchError> {
    let mut documents = corpus::list_documents(&config.batch.corpus_dir)?;
    if let Some(cap) = config.max_documents {
        // Cost-control cutoff happens before dispatch, so cancellation
        // never races partially written artifacts.
        documents.truncate(cap);
    }
    fs::create_dir_all(&config.batch.output_dir)?;

    let rules = Arc::new(CompiledRuleSet::compile(state)?);
    info!(
        total = documents.len(),
        corpus = %config.batch.corpus_dir.display(),
        "starting validation run"
    );

    let timeout = config.batch.extraction_timeout;
    let work: DocumentWork<ValidatedDocument> = {
        let rules = Arc::clone(&rules);
        Arc::new(move |path: PathBuf| {
            let rules = Arc::clone(&rules);
            let source = Arc::clone(&source);
            Box::pin(async move {
                let text = extract_text_bounded(source.as_ref(), &path, timeout).await?;
                let detection = detect_sections(&text, &rules);
                let fields = extract_fields(&text);
                Ok(ValidatedDocument {
                    detection,
                    field_count: fields.len(),
                })
            })
        })
    };

    let mut rx = pool::dispatch(documents, config.batch.concurrency, work);

    let mut records = Vec::new();
    let mut failed_extractions = 0usize;

    while let Some(outcome) = rx.recv().await {
        match outcome.result {
            Ok(validated) => {
                let record = evaluate_document(
                    &outcome.document_id,
                    &validated.detection.sections,
                    &config.expected_sections,
                    config.document_pass_threshold,
                );
                debug!(
                    document = %outcome.document_id,
                    found = record.found_sections,
                    fields = validated.field_count,
                    passed = record.passed,
                    "document validated"
                );
                records.push(record);
            }
            Err(failure) => {
                failed_extractions += 1;
                warn!(document = %outcome.document_id, error = %failure, "document skipped");
            }
        }
    }

    // Workers complete out of order; keep the artifact deterministic.
    records.sort_by(|a, b| a.document_id.cmp(&b.document_id));

    let summary = summarize(&records, &config.expected_sections);
    let passed = summary.total_documents > 0
        && (summary.passed_documents as f64 / summary.total_documents as f64)
            >= config.aggregate_pass_threshold;

    artifact::write_json_atomic(
        &config.batch.output_dir.join("document_validation_results.json"),
        &records,
    )?;
    artifact::write_json_atomic(
        &config.batch.output_dir.join("validation_summary.json"),
        &summary,
    )?;

    info!(
        validated = summary.total_documents,
        passed_documents = summary.passed_documents,
        failed_extractions,
        verdict = if passed { "pass" } else { "fail" },
        "validation run complete"
    );

    Ok(ValidationReport {
        records,
        summary,
        passed,
    })
}
