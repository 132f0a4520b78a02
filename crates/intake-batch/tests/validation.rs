use std::collections::BTreeMap;

use intake_batch::validate::{evaluate_document, summarize};
use intake_core::models::{SectionMatch, SectionType};

fn detected(found: &[SectionType], confidence: f64) -> BTreeMap<SectionType, SectionMatch> {
    let mut sections = BTreeMap::new();
    for section in SectionType::ALL {
        let mut section_match = SectionMatch::not_found(section);
        if found.contains(&section) {
            section_match.found = true;
            section_match.confidence = confidence;
        }
        sections.insert(section, section_match);
    }
    sections
}

#[test]
fn five_of_nine_expected_sections_fails_the_document() {
    let found = [
        SectionType::Demographics,
        SectionType::MedicalHistory,
        SectionType::Symptoms,
        SectionType::FunctionalStatus,
        SectionType::AttendantCare,
    ];
    let record = evaluate_document("doc-1", &detected(&found, 0.8), &SectionType::ALL, 0.6);

    assert_eq!(record.found_sections, 5);
    assert_eq!(record.missed_sections, 4);
    // 5/9 ≈ 0.56, under the 0.6 bar.
    assert!(!record.passed);
}

#[test]
fn six_of_nine_expected_sections_passes_the_document() {
    let found = [
        SectionType::Demographics,
        SectionType::MedicalHistory,
        SectionType::Symptoms,
        SectionType::FunctionalStatus,
        SectionType::AttendantCare,
        SectionType::Schedule,
    ];
    let record = evaluate_document("doc-1", &detected(&found, 0.8), &SectionType::ALL, 0.6);

    assert_eq!(record.found_sections, 6);
    assert!(record.passed);
}

#[test]
fn unexpected_sections_are_tracked_but_not_penalized() {
    let expected = [SectionType::Demographics, SectionType::MedicalHistory];
    let found = [
        SectionType::Demographics,
        SectionType::MedicalHistory,
        SectionType::Schedule,
    ];
    let record = evaluate_document("doc-1", &detected(&found, 0.7), &expected, 0.6);

    assert_eq!(record.found_sections, 2);
    assert_eq!(record.unexpected_sections, 1);
    assert!(record.passed);

    let schedule = &record.sections[&SectionType::Schedule];
    assert!(!schedule.expected);
    assert!(schedule.found);
}

#[test]
fn summary_aggregates_rates_and_confidence() {
    let expected = [SectionType::Demographics, SectionType::Symptoms];
    let records = vec![
        evaluate_document(
            "doc-1",
            &detected(&[SectionType::Demographics, SectionType::Symptoms], 0.9),
            &expected,
            0.6,
        ),
        evaluate_document(
            "doc-2",
            &detected(&[SectionType::Demographics], 0.7),
            &expected,
            0.6,
        ),
    ];

    let summary = summarize(&records, &expected);

    assert_eq!(summary.total_documents, 2);
    assert_eq!(summary.passed_documents, 1);
    assert_eq!(summary.failed_documents, 1);

    let demographics = &summary.sections[&SectionType::Demographics];
    assert_eq!(demographics.expected, 2);
    assert_eq!(demographics.found, 2);
    assert_eq!(demographics.detection_rate, 1.0);
    assert!((demographics.avg_confidence - 0.8).abs() < 1e-9);

    let symptoms = &summary.sections[&SectionType::Symptoms];
    assert_eq!(symptoms.found, 1);
    assert_eq!(symptoms.missed, 1);
    assert_eq!(symptoms.detection_rate, 0.5);

    assert_eq!(summary.section_detection.total, 4);
    assert_eq!(summary.section_detection.found, 3);
    assert_eq!(summary.section_detection.not_found, 1);
    assert!((summary.section_detection.detection_rate - 0.75).abs() < 1e-9);
}

#[test]
fn confidence_is_only_sampled_from_found_sections() {
    let expected = [SectionType::Demographics];
    let record = evaluate_document("doc-1", &detected(&[], 0.9), &expected, 0.6);

    let outcome = &record.sections[&SectionType::Demographics];
    assert!(outcome.expected);
    assert!(!outcome.found);
    assert!(outcome.confidence.is_none());

    let summary = summarize(&[record], &expected);
    assert_eq!(summary.sections[&SectionType::Demographics].avg_confidence, 0.0);
}
