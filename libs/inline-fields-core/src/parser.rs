//! Sentence template parser.
//!
//! # Format
//! ```text
//! The quick brown {fox} jumps over the lazy {dog}.
//! Paris is the capital of __France__.     (delimiter token "__")
//! ```
//!
//! A sentence is literal text with fields embedded between delimiter tokens;
//! the text between an open and its nearest subsequent close token is the
//! field's expected solution.

use crate::error::ParseError;
use crate::types::{DelimiterSpec, Field, ParsedSentence, SentencePart};

/// Parse one sentence into its literal segments and fields.
///
/// The scan is left-to-right and non-nesting: each open token is terminated
/// by the nearest subsequent close token, which also resolves the ambiguity
/// of identical open/close tokens. An open token with no close before the
/// sentence ends is an error. `sentence_index` is recorded on every parsed
/// field.
pub fn parse(
    sentence: &str,
    delimiter: &DelimiterSpec,
    sentence_index: usize,
) -> Result<ParsedSentence, ParseError> {
    if delimiter.open.is_empty() || delimiter.close.is_empty() {
        return Err(ParseError::EmptyDelimiter);
    }

    let mut parts = Vec::new();
    let mut field_index = 0;
    let mut cursor = 0;

    while let Some(found) = sentence[cursor..].find(&delimiter.open) {
        let open_at = cursor + found;
        if open_at > cursor {
            parts.push(SentencePart::Text {
                content: sentence[cursor..open_at].to_string(),
            });
        }

        let solution_start = open_at + delimiter.open.len();
        let close_at = sentence[solution_start..]
            .find(&delimiter.close)
            .map(|rel| solution_start + rel)
            .ok_or(ParseError::UnterminatedField { offset: open_at })?;

        parts.push(SentencePart::Field(Field {
            sentence_index,
            field_index,
            solution: sentence[solution_start..close_at].to_string(),
        }));
        field_index += 1;
        cursor = close_at + delimiter.close.len();
    }

    if cursor < sentence.len() {
        parts.push(SentencePart::Text {
            content: sentence[cursor..].to_string(),
        });
    }

    Ok(ParsedSentence::new(parts, delimiter.clone()))
}
