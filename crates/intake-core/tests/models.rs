use std::str::FromStr;

use intake_core::models::{ExtractedField, Matcher, MatchType, SectionType};

#[test]
fn section_types_round_trip_through_display_and_from_str() {
    for section in SectionType::ALL {
        let parsed = SectionType::from_str(&section.to_string()).unwrap();
        assert_eq!(parsed, section);
    }
}

#[test]
fn section_type_parsing_is_case_insensitive() {
    assert_eq!(
        SectionType::from_str("medical_history").unwrap(),
        SectionType::MedicalHistory
    );
    assert!(SectionType::from_str("BILLING").is_err());
}

#[test]
fn section_type_serializes_to_screaming_snake_keys() {
    let json = serde_json::to_string(&SectionType::MedicalHistory).unwrap();
    assert_eq!(json, "\"MEDICAL_HISTORY\"");
}

#[test]
fn match_type_serializes_camel_case() {
    let json = serde_json::to_string(&MatchType::WithSeparator).unwrap();
    assert_eq!(json, "\"withSeparator\"");
}

#[test]
fn matcher_serializes_externally_tagged() {
    let json = serde_json::to_string(&Matcher::Literal("demographics".to_string())).unwrap();
    assert_eq!(json, "{\"literal\":\"demographics\"}");
}

#[test]
fn extracted_field_confidence_is_clamped_to_percentage_bounds() {
    let field = ExtractedField::new("x", "y", 140.0, 0, SectionType::Demographics);
    assert_eq!(field.confidence, 100.0);

    let field = ExtractedField::new("x", "y", -3.0, 0, SectionType::Demographics);
    assert_eq!(field.confidence, 0.0);
}
