//! Error types for inline-fields-core.

use thiserror::Error;

/// Result type alias using ValidationError.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Errors that can occur while parsing a sentence template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated field: open token at byte {offset} has no closing token")]
    UnterminatedField { offset: usize },

    #[error("delimiter tokens must not be empty")]
    EmptyDelimiter,
}

/// Mismatches between supplied answers and the parsed sentence structure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("expected answers for {expected} sentences, got {actual}")]
    SentenceCount { expected: usize, actual: usize },

    #[error("sentence {sentence_index} has {expected} fields, got {actual} answers")]
    FieldCount {
        sentence_index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Combined error surface of the validation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("sentence {sentence_index}: {source}")]
    Parse {
        sentence_index: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
