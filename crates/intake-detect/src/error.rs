use intake_core::models::SectionType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("invalid matcher {matcher:?} for {section}: {source}")]
    InvalidMatcher {
        section: SectionType,
        matcher: String,
        #[source]
        source: regex::Error,
    },
}
