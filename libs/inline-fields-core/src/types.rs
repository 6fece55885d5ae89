//! Core types for inline field validation.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// Tokens marking where a field starts and ends inside a raw sentence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelimiterSpec {
    pub open: String,
    pub close: String,
}

impl Default for DelimiterSpec {
    /// The distinguished `{`/`}` pair.
    fn default() -> Self {
        Self {
            open: "{".to_string(),
            close: "}".to_string(),
        }
    }
}

impl DelimiterSpec {
    /// Distinct open and close tokens.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self, ParseError> {
        let spec = Self {
            open: open.into(),
            close: close.into(),
        };
        if spec.open.is_empty() || spec.close.is_empty() {
            return Err(ParseError::EmptyDelimiter);
        }
        Ok(spec)
    }

    /// A single custom token used verbatim as both open and close marker.
    pub fn token(token: impl Into<String>) -> Result<Self, ParseError> {
        let token = token.into();
        Self::new(token.clone(), token)
    }
}

/// A blank in a sentence template with its expected solution.
///
/// `field_index` is zero-based, left-to-right within the sentence. The
/// solution may be the empty string (an intentionally blank field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub sentence_index: usize,
    pub field_index: usize,
    pub solution: String,
}

/// One element of a parsed sentence: either literal text or a field.
///
/// Serializes with a `type` tag (`"text"` / `"field"`), the shape the
/// rendering layer consumes directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SentencePart {
    Text { content: String },
    Field(Field),
}

/// Ordered interleaving of literal segments and fields for one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSentence {
    pub parts: Vec<SentencePart>,
    delimiter: DelimiterSpec,
}

impl ParsedSentence {
    pub(crate) fn new(parts: Vec<SentencePart>, delimiter: DelimiterSpec) -> Self {
        Self { parts, delimiter }
    }

    /// The delimiter this sentence was parsed with.
    pub fn delimiter(&self) -> &DelimiterSpec {
        &self.delimiter
    }

    /// Fields in left-to-right order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.parts.iter().filter_map(|part| match part {
            SentencePart::Field(field) => Some(field),
            SentencePart::Text { .. } => None,
        })
    }

    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    /// Re-emit the original sentence, delimiters included.
    pub fn reconstruct(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                SentencePart::Text { content } => out.push_str(content),
                SentencePart::Field(field) => {
                    out.push_str(&self.delimiter.open);
                    out.push_str(&field.solution);
                    out.push_str(&self.delimiter.close);
                }
            }
        }
        out
    }
}

/// Matching tolerance, supplied per validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub ignore_accents: bool,
    pub accepted_levenshtein_distance: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ignore_accents: false,
            accepted_levenshtein_distance: 0,
        }
    }
}

/// Validation status of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Empty,
    False,
    Acceptable,
    Perfect,
}

/// Per-field statuses: outer index = sentence, inner index = field.
pub type ValidationResult = Vec<Vec<FieldStatus>>;
