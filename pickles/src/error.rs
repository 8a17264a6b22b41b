//! Typed errors for mapping, report loading, and result queries.
//!
//! Unmatched titles are never errors; they surface as
//! [`TestResult::Inconclusive`](crate::core::verdict::TestResult::Inconclusive).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A scenario-definition node that is neither a scenario nor an outline.
    #[error("unsupported node kind '{kind}': only Scenario and ScenarioOutline are supported")]
    UnsupportedNodeKind { kind: &'static str },

    #[error("keyword '{keyword}' is not recognized for language '{language}'")]
    KeywordResolution { keyword: String, language: String },

    #[error("table must have at least one row (the header)")]
    MalformedTable,

    #[error("language '{0}' has no keyword table")]
    UnsupportedLanguage(String),

    #[error("document has no feature")]
    MissingFeature,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("malformed report: {0}")]
    Malformed(String),

    #[error("read report {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Raised when a caller ignores a `supports_*` capability flag.
    #[error("{0} is not supported by this results source")]
    UnsupportedQuery(&'static str),
}
