//! Built-in seed pattern set.
//!
//! Hand-authored from referral corpus analysis; weights reflect how
//! specific each phrase is to its section. Calibration rewrites the
//! weights over time, the matchers themselves stay authored.

use std::collections::BTreeMap;

use intake_core::models::{
    ContextPosition, ContextualPattern, Matcher, Pattern, PatternTier, SectionType,
};

use crate::repository::{RepositoryState, SectionPatterns};

pub const REPOSITORY_VERSION: u32 = 3;

fn lit(tier: PatternTier, matcher: &str, weight: f64) -> Pattern {
    Pattern {
        matcher: Matcher::Literal(matcher.to_string()),
        tier,
        confidence_weight: weight,
    }
}

fn re(tier: PatternTier, matcher: &str, weight: f64) -> Pattern {
    Pattern {
        matcher: Matcher::Regex(matcher.to_string()),
        tier,
        confidence_weight: weight,
    }
}

fn ctx(position: ContextPosition, matcher: &str, weight: f64) -> ContextualPattern {
    ContextualPattern {
        matcher: Matcher::Literal(matcher.to_string()),
        position,
        confidence_weight: weight,
    }
}

/// The default repository shipped with the engine.
pub fn default_repository() -> RepositoryState {
    use ContextPosition::{After, Before};
    use PatternTier::{Context, Strong, Weak};

    let mut sections = BTreeMap::new();

    sections.insert(
        SectionType::Demographics,
        SectionPatterns {
            patterns: vec![
                lit(Strong, "demographics", 0.9),
                lit(Strong, "client information", 0.85),
                lit(Strong, "claimant information", 0.85),
                lit(Strong, "personal information", 0.8),
                re(Strong, r"client\s+(details|profile)", 0.75),
                lit(Context, "date of birth", 0.6),
                lit(Context, "address", 0.45),
                lit(Context, "telephone", 0.4),
                lit(Weak, "client", 0.25),
            ],
            contextual: vec![
                ctx(Before, "referral", 0.4),
                ctx(After, "date of birth", 0.6),
            ],
        },
    );

    sections.insert(
        SectionType::MedicalHistory,
        SectionPatterns {
            patterns: vec![
                lit(Strong, "medical history", 0.9),
                lit(Strong, "past medical history", 0.9),
                lit(Strong, "health history", 0.8),
                lit(Context, "diagnosis", 0.6),
                lit(Context, "medications", 0.55),
                lit(Context, "surgical history", 0.55),
                lit(Weak, "history", 0.2),
            ],
            contextual: vec![ctx(After, "diagnosis", 0.55)],
        },
    );

    sections.insert(
        SectionType::Symptoms,
        SectionPatterns {
            patterns: vec![
                lit(Strong, "current symptoms", 0.9),
                lit(Strong, "symptoms", 0.85),
                lit(Strong, "presenting complaints", 0.8),
                lit(Strong, "chief complaint", 0.8),
                lit(Context, "pain", 0.4),
                lit(Context, "headaches", 0.4),
                lit(Weak, "complaints", 0.3),
            ],
            contextual: vec![ctx(After, "pain", 0.4)],
        },
    );

    sections.insert(
        SectionType::FunctionalStatus,
        SectionPatterns {
            patterns: vec![
                lit(Strong, "functional status", 0.9),
                lit(Strong, "functional abilities", 0.85),
                lit(Strong, "activities of daily living", 0.85),
                re(Strong, r"\badls?\b", 0.7),
                lit(Context, "mobility", 0.5),
                lit(Context, "self-care", 0.5),
                lit(Context, "transfers", 0.45),
                lit(Weak, "function", 0.2),
            ],
            contextual: vec![ctx(After, "mobility", 0.5)],
        },
    );

    sections.insert(
        SectionType::AttendantCare,
        SectionPatterns {
            patterns: vec![
                lit(Strong, "attendant care", 0.9),
                lit(Strong, "attendant care needs", 0.9),
                lit(Strong, "form 1", 0.7),
                lit(Context, "personal care", 0.55),
                lit(Context, "caregiver", 0.5),
                lit(Context, "supervision", 0.45),
                lit(Weak, "care needs", 0.35),
            ],
            contextual: vec![ctx(Before, "assessment of attendant care", 0.6)],
        },
    );

    sections.insert(
        SectionType::Psychosocial,
        SectionPatterns {
            patterns: vec![
                lit(Strong, "psychosocial status", 0.9),
                lit(Strong, "psychosocial", 0.85),
                lit(Strong, "emotional status", 0.75),
                lit(Context, "mood", 0.45),
                lit(Context, "anxiety", 0.45),
                lit(Context, "depression", 0.45),
                lit(Weak, "coping", 0.3),
            ],
            contextual: vec![],
        },
    );

    sections.insert(
        SectionType::HomeEnvironment,
        SectionPatterns {
            patterns: vec![
                lit(Strong, "home environment", 0.9),
                lit(Strong, "environmental assessment", 0.85),
                lit(Strong, "living situation", 0.75),
                lit(Context, "accessibility", 0.5),
                lit(Context, "stairs", 0.45),
                lit(Context, "bathroom", 0.4),
                lit(Weak, "home", 0.2),
            ],
            contextual: vec![ctx(After, "stairs", 0.45)],
        },
    );

    sections.insert(
        SectionType::AssessmentRequirements,
        SectionPatterns {
            patterns: vec![
                lit(Strong, "assessment requirements", 0.9),
                lit(Strong, "services requested", 0.85),
                lit(Strong, "reason for referral", 0.8),
                lit(Strong, "please assess", 0.7),
                lit(Context, "in-home assessment", 0.55),
                lit(Context, "situational assessment", 0.5),
                lit(Weak, "requirements", 0.3),
            ],
            contextual: vec![ctx(After, "in-home assessment", 0.55)],
        },
    );

    sections.insert(
        SectionType::Schedule,
        SectionPatterns {
            patterns: vec![
                lit(Strong, "appointment schedule", 0.9),
                lit(Strong, "assessment schedule", 0.85),
                lit(Strong, "schedule", 0.75),
                lit(Context, "appointment", 0.5),
                lit(Context, "date and time", 0.45),
                lit(Weak, "location", 0.25),
            ],
            contextual: vec![ctx(After, "appointment", 0.5)],
        },
    );

    RepositoryState {
        version: REPOSITORY_VERSION,
        sections,
    }
}
