//! Error types for styleprint-core.

use thiserror::Error;

/// Errors that can occur during text analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text is empty or has no scorable content.
    #[error("no scorable text in input")]
    EmptyInput,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can occur while building a stylometric profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Every supplied document was empty or whitespace-only.
    #[error("no valid documents could be analyzed")]
    NoValidDocuments,

    /// An analysis failed on the combined corpus.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Result type alias using [`ProfileError`].
pub type ProfileResult<T> = Result<T, ProfileError>;
