use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The structured sections a referral document may contain.
///
/// Serialized form is the screaming-snake key used throughout the
/// persisted artifacts (e.g. `"MEDICAL_HISTORY"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum SectionType {
    Demographics,
    MedicalHistory,
    Symptoms,
    FunctionalStatus,
    AttendantCare,
    Psychosocial,
    HomeEnvironment,
    AssessmentRequirements,
    Schedule,
}

impl SectionType {
    pub const ALL: [SectionType; 9] = [
        SectionType::Demographics,
        SectionType::MedicalHistory,
        SectionType::Symptoms,
        SectionType::FunctionalStatus,
        SectionType::AttendantCare,
        SectionType::Psychosocial,
        SectionType::HomeEnvironment,
        SectionType::AssessmentRequirements,
        SectionType::Schedule,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Demographics => "DEMOGRAPHICS",
            SectionType::MedicalHistory => "MEDICAL_HISTORY",
            SectionType::Symptoms => "SYMPTOMS",
            SectionType::FunctionalStatus => "FUNCTIONAL_STATUS",
            SectionType::AttendantCare => "ATTENDANT_CARE",
            SectionType::Psychosocial => "PSYCHOSOCIAL",
            SectionType::HomeEnvironment => "HOME_ENVIRONMENT",
            SectionType::AssessmentRequirements => "ASSESSMENT_REQUIREMENTS",
            SectionType::Schedule => "SCHEDULE",
        }
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownSectionType(s.to_string()))
    }
}
