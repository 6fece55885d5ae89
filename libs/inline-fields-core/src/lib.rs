//! Core validation library for inline text fields embedded in sentences.
//!
//! Provides:
//! - Template parser for delimiter-marked sentences ("The quick brown {fox}...")
//! - Accent-folding normalizer
//! - Levenshtein answer matching with configurable tolerance
//! - Validation engine producing ordered per-field statuses
//!
//! The crate is purely computational: no I/O, no UI, no persistence. A
//! presentation layer parses sentences once (see
//! [`Validator::parse_sentences`]) and revalidates the current answers on
//! every input change (see [`Validator::validate`]).

pub mod engine;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod parser;
pub mod types;

pub use engine::{validate, Validator};
pub use error::{ParseError, Result, ShapeError, ValidationError};
pub use matching::{classify, levenshtein_distance};
pub use normalize::normalize;
pub use parser::parse;
pub use types::{
    DelimiterSpec, Field, FieldStatus, MatchConfig, ParsedSentence, SentencePart,
    ValidationResult,
};
