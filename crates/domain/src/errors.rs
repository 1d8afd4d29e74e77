//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Article text was empty or whitespace-only
    #[error("Article text is required")]
    EmptyArticle,

    /// No artifact kinds were requested
    #[error("At least one artifact kind is required")]
    NoKindsRequested,

    /// Unknown artifact kind string
    #[error("Unknown artifact kind: {0}")]
    UnknownKind(String),
}
