use intake_core::models::SectionType;
use intake_extract::extract_fields;

#[test]
fn labeled_identity_lines_extract_with_high_confidence() {
    let text = "\
Referral for In-Home Assessment

Client: Jane Doe
Date of Birth: 1990-04-12
Address: 42 Maple Street, Hamilton ON
Telephone: (905) 555-0143
";
    let fields = extract_fields(text);

    let name = fields.iter().find(|f| f.name == "client_name").unwrap();
    assert_eq!(name.value, "Jane Doe");
    assert_eq!(name.confidence, 92.0);
    assert_eq!(name.source_line, 2);
    assert_eq!(name.section_type, SectionType::Demographics);

    let dob = fields.iter().find(|f| f.name == "date_of_birth").unwrap();
    assert_eq!(dob.value, "1990-04-12");
    assert_eq!(dob.confidence, 95.0);

    assert!(fields.iter().any(|f| f.name == "address"));
    assert!(fields.iter().any(|f| f.name == "telephone"));
}

#[test]
fn bare_name_label_is_lower_confidence_fallback() {
    let fields = extract_fields("Name: John Q. Public\n");
    let name = fields.iter().find(|f| f.name == "client_name").unwrap();
    assert_eq!(name.value, "John Q. Public");
    assert_eq!(name.confidence, 85.0);
}

#[test]
fn claim_identifiers_extract_from_labeled_lines() {
    let text = "\
Date of Loss: 2023-01-05
Claim Number: AB-4471-X
File No: 2023-118
Policy #: POL-9920
Insurer: Example Mutual
Adjuster: Sam Rivera
";
    let fields = extract_fields(text);

    assert_eq!(
        fields.iter().find(|f| f.name == "date_of_loss").unwrap().value,
        "2023-01-05"
    );
    assert_eq!(
        fields.iter().find(|f| f.name == "claim_number").unwrap().value,
        "AB-4471-X"
    );
    assert_eq!(
        fields.iter().find(|f| f.name == "file_number").unwrap().value,
        "2023-118"
    );
    assert_eq!(
        fields.iter().find(|f| f.name == "policy_number").unwrap().value,
        "POL-9920"
    );
    assert_eq!(
        fields.iter().find(|f| f.name == "insurer").unwrap().value,
        "Example Mutual"
    );
    assert_eq!(
        fields.iter().find(|f| f.name == "adjuster").unwrap().value,
        "Sam Rivera"
    );
}

#[test]
fn requirement_bullets_extract_until_shape_breaks() {
    let text = "\
Assessment Requirements

• In-home assessment of attendant care needs
• Functional assessment
• Situational assessment at the worksite
The remainder of this letter is prose.
";
    let fields = extract_fields(text);
    let requirements: Vec<_> = fields
        .iter()
        .filter(|f| f.section_type == SectionType::AssessmentRequirements)
        .collect();

    assert_eq!(requirements.len(), 3);
    assert_eq!(requirements[0].name, "requirement_1");
    assert_eq!(
        requirements[0].value,
        "In-home assessment of attendant care needs"
    );
    assert_eq!(requirements[2].value, "Situational assessment at the worksite");
    assert!(requirements.iter().all(|f| f.confidence == 70.0));
}

#[test]
fn schedule_rows_need_three_columns() {
    let text = "\
Assessment Schedule

May 3, 2024    10:00 AM    Client home
May 10, 2024  9:00
May 17, 2024   2:30 PM    Clinic, 12 King St
";
    let fields = extract_fields(text);
    let rows: Vec<_> = fields
        .iter()
        .filter(|f| f.section_type == SectionType::Schedule)
        .collect();

    // The malformed two-column row is skipped silently, never emitted
    // as a partial field.
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].value, "May 3, 2024 | 10:00 AM | Client home");
    assert_eq!(rows[1].value, "May 17, 2024 | 2:30 PM | Clinic, 12 King St");
    assert!(rows.iter().all(|f| f.confidence == 60.0));
}

#[test]
fn prose_after_schedule_anchor_produces_no_rows() {
    let text = "\
Schedule
We will confirm the appointment by telephone.
";
    let fields = extract_fields(text);
    assert!(fields.iter().all(|f| f.section_type != SectionType::Schedule));
}

#[test]
fn absent_anchors_produce_no_multi_value_fields() {
    let fields = extract_fields("Nothing relevant here.\n");
    assert!(fields.is_empty());
}

#[test]
fn all_field_confidences_are_within_percentage_bounds() {
    let text = "\
Client: Jane Doe
Date of Loss: 2023-01-05
Assessment Requirements
• One requirement
Schedule
May 3, 2024    10:00 AM    Client home
";
    for field in extract_fields(text) {
        assert!((0.0..=100.0).contains(&field.confidence), "{field:?}");
    }
}
