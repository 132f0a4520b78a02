use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use intake_batch::analyze::run_analysis;
use intake_batch::source::BoxFuture;
use intake_batch::validate::run_validation;
use intake_batch::{BatchConfig, DocumentFailure, FileTextSource, TextSource, ValidationConfig};
use intake_core::models::{SectionMatch, SectionType};
use intake_patterns::defaults::default_repository;

const RICH_DOCUMENT: &str = "\
Demographics
Client: Jane Doe
Date of Birth: 1990-04-12

3. Medical History
Fractured tibia in 2021.

Current Symptoms
Ongoing pain and headaches.

Functional Status
Limited mobility, difficulty with transfers.

Attendant Care
Requires assistance with personal care.

Psychosocial
Low mood reported since the accident.

Home Environment
Two-storey home with stairs to the bathroom.

Assessment Requirements
• In-home assessment of attendant care needs

Schedule
May 3, 2024    10:00 AM    Client home
";

const SPARSE_DOCUMENT: &str = "\
Invoice for consulting.
Amount due on receipt.
";

fn write_corpus(dir: &Path, documents: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, text) in documents {
        fs::write(dir.join(name), text).unwrap();
    }
}

#[tokio::test]
async fn analysis_writes_per_document_and_summary_artifacts() {
    let tmp = TempDir::new().unwrap();
    let corpus = tmp.path().join("corpus");
    let output = tmp.path().join("out");
    write_corpus(
        &corpus,
        &[("rich.txt", RICH_DOCUMENT), ("sparse.txt", SPARSE_DOCUMENT)],
    );

    let config = BatchConfig::new(&corpus, &output);
    let summary = run_analysis(&config, &default_repository(), Arc::new(FileTextSource))
        .await
        .unwrap();

    assert_eq!(summary.documents.total, 2);
    assert_eq!(summary.documents.processed, 2);
    assert_eq!(summary.documents.failed, 0);

    // One artifact per document plus the corpus summary, all valid JSON.
    let rich: BTreeMap<SectionType, SectionMatch> =
        serde_json::from_slice(&fs::read(output.join("rich_patterns.json")).unwrap()).unwrap();
    assert!(rich[&SectionType::Demographics].found);
    assert!(rich[&SectionType::Schedule].found);

    let sparse: BTreeMap<SectionType, SectionMatch> =
        serde_json::from_slice(&fs::read(output.join("sparse_patterns.json")).unwrap()).unwrap();
    assert!(sparse.values().all(|m| !m.found));

    assert!(output.join("analysis_summary.json").exists());
    assert_eq!(summary.sections[&SectionType::Demographics].found, 1);
    assert_eq!(summary.sections[&SectionType::Demographics].not_found, 1);
    assert!(!summary.pattern_matches.is_empty());
}

#[tokio::test]
async fn validation_reports_aggregate_verdict_and_artifacts() {
    let tmp = TempDir::new().unwrap();
    let corpus = tmp.path().join("corpus");
    let output = tmp.path().join("out");
    write_corpus(
        &corpus,
        &[("rich.txt", RICH_DOCUMENT), ("sparse.txt", SPARSE_DOCUMENT)],
    );

    let config = ValidationConfig::new(BatchConfig::new(&corpus, &output));
    let report = run_validation(&config, &default_repository(), Arc::new(FileTextSource))
        .await
        .unwrap();

    assert_eq!(report.summary.total_documents, 2);
    assert_eq!(report.summary.passed_documents, 1);
    // 1/2 passed is under the 0.7 aggregate bar.
    assert!(!report.passed);

    let rich = report
        .records
        .iter()
        .find(|r| r.document_id == "rich")
        .unwrap();
    assert_eq!(rich.found_sections, 9);
    assert!(rich.passed);

    assert!(output.join("document_validation_results.json").exists());
    assert!(output.join("validation_summary.json").exists());
}

#[tokio::test]
async fn validation_caps_the_sample_size_before_dispatch() {
    let tmp = TempDir::new().unwrap();
    let corpus = tmp.path().join("corpus");
    let output = tmp.path().join("out");
    write_corpus(
        &corpus,
        &[
            ("a.txt", RICH_DOCUMENT),
            ("b.txt", RICH_DOCUMENT),
            ("c.txt", RICH_DOCUMENT),
        ],
    );

    let mut config = ValidationConfig::new(BatchConfig::new(&corpus, &output));
    config.max_documents = Some(2);
    let report = run_validation(&config, &default_repository(), Arc::new(FileTextSource))
        .await
        .unwrap();

    assert_eq!(report.summary.total_documents, 2);
    assert!(report.records.iter().all(|r| r.document_id != "c"));
}

struct FlakySource;

impl TextSource for FlakySource {
    fn extract_text<'a>(
        &'a self,
        path: &'a Path,
    ) -> BoxFuture<'a, Result<String, DocumentFailure>> {
        let path = path.to_path_buf();
        Box::pin(async move {
            if path.file_name().is_some_and(|n| n.to_string_lossy().contains("bad")) {
                return Err(DocumentFailure::Extraction("simulated failure".to_string()));
            }
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| DocumentFailure::Extraction(e.to_string()))
        })
    }
}

#[tokio::test]
async fn one_failing_document_does_not_abort_the_batch() {
    let tmp = TempDir::new().unwrap();
    let corpus = tmp.path().join("corpus");
    let output = tmp.path().join("out");
    write_corpus(
        &corpus,
        &[("good.txt", RICH_DOCUMENT), ("bad.txt", RICH_DOCUMENT)],
    );

    let config = BatchConfig::new(&corpus, &output);
    let summary = run_analysis(&config, &default_repository(), Arc::new(FlakySource))
        .await
        .unwrap();

    assert_eq!(summary.documents.processed, 1);
    assert_eq!(summary.documents.failed, 1);
    assert!(output.join("good_patterns.json").exists());
    assert!(!output.join("bad_patterns.json").exists());
}

struct StalledSource;

impl TextSource for StalledSource {
    fn extract_text<'a>(
        &'a self,
        _path: &'a Path,
    ) -> BoxFuture<'a, Result<String, DocumentFailure>> {
        Box::pin(async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(String::new())
        })
    }
}

#[tokio::test]
async fn stalled_extraction_is_a_recorded_failure_not_a_hang() {
    let tmp = TempDir::new().unwrap();
    let corpus = tmp.path().join("corpus");
    let output = tmp.path().join("out");
    write_corpus(&corpus, &[("slow.txt", RICH_DOCUMENT)]);

    let mut config = BatchConfig::new(&corpus, &output);
    config.extraction_timeout = Duration::from_millis(50);
    let summary = run_analysis(&config, &default_repository(), Arc::new(StalledSource))
        .await
        .unwrap();

    assert_eq!(summary.documents.processed, 0);
    assert_eq!(summary.documents.failed, 1);
}

#[tokio::test]
async fn concurrent_documents_produce_isolated_valid_artifacts() {
    let tmp = TempDir::new().unwrap();
    let corpus = tmp.path().join("corpus");
    let output = tmp.path().join("out");
    let names = ["w.txt", "x.txt", "y.txt", "z.txt"];
    write_corpus(&corpus, &names.map(|n| (n, RICH_DOCUMENT)));

    let mut config = BatchConfig::new(&corpus, &output);
    config.concurrency = 4;
    run_analysis(&config, &default_repository(), Arc::new(FileTextSource))
        .await
        .unwrap();

    for name in ["w", "x", "y", "z"] {
        let bytes = fs::read(output.join(format!("{name}_patterns.json"))).unwrap();
        let parsed: BTreeMap<SectionType, SectionMatch> =
            serde_json::from_slice(&bytes).unwrap();
        assert!(parsed[&SectionType::Demographics].found);
    }
}

#[tokio::test]
async fn missing_corpus_directory_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let config = BatchConfig::new(tmp.path().join("nope"), tmp.path().join("out"));

    let err = run_analysis(&config, &default_repository(), Arc::new(FileTextSource))
        .await
        .unwrap_err();
    assert!(matches!(err, intake_batch::BatchError::CorpusNotFound { .. }));
}
