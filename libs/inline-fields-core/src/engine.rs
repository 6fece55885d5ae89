//! Validation engine orchestrating parser, normalizer, and matcher.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::{debug, trace};

use crate::error::{Result, ShapeError, ValidationError};
use crate::matching::classify;
use crate::parser;
use crate::types::{DelimiterSpec, MatchConfig, ParsedSentence, ValidationResult};

type CacheKey = (usize, String, DelimiterSpec);

/// Stateless validator apart from its parse cache.
///
/// The same sentence set is typically revalidated on every keystroke, so
/// parses are cached by `(sentence_index, sentence, delimiter)`. The cache is
/// behind an `RwLock`; a `Validator` can be shared across threads and readers
/// never observe a partially written entry. Scoring itself holds no state.
#[derive(Debug, Default)]
pub struct Validator {
    cache: RwLock<HashMap<CacheKey, Arc<ParsedSentence>>>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate per-field answers against the fields parsed from `sentences`.
    ///
    /// `answers` must carry one inner sequence per sentence and one string
    /// per parsed field, in field order; any mismatch is a [`ShapeError`].
    /// The result is freshly built on every call: outer index = sentence,
    /// inner index = field.
    pub fn validate(
        &self,
        sentences: &[String],
        delimiter: &DelimiterSpec,
        answers: &[Vec<String>],
        config: &MatchConfig,
    ) -> Result<ValidationResult> {
        if answers.len() != sentences.len() {
            return Err(ShapeError::SentenceCount {
                expected: sentences.len(),
                actual: answers.len(),
            }
            .into());
        }

        trace!(sentences = sentences.len(), "validating batch");

        let mut result = Vec::with_capacity(sentences.len());
        for (sentence_index, sentence) in sentences.iter().enumerate() {
            let parsed = self.parsed(sentence, delimiter, sentence_index)?;
            let slots = &answers[sentence_index];
            if slots.len() != parsed.field_count() {
                return Err(ShapeError::FieldCount {
                    sentence_index,
                    expected: parsed.field_count(),
                    actual: slots.len(),
                }
                .into());
            }

            let statuses = parsed
                .fields()
                .zip(slots)
                .map(|(field, answer)| classify(answer, &field.solution, config))
                .collect();
            result.push(statuses);
        }

        Ok(result)
    }

    /// Parse a batch of sentences without scoring.
    ///
    /// This is the structure the rendering layer consumes to lay out
    /// segments and input fields; parses are cached like in [`validate`].
    ///
    /// [`validate`]: Validator::validate
    pub fn parse_sentences(
        &self,
        sentences: &[String],
        delimiter: &DelimiterSpec,
    ) -> Result<Vec<Arc<ParsedSentence>>> {
        sentences
            .iter()
            .enumerate()
            .map(|(sentence_index, sentence)| self.parsed(sentence, delimiter, sentence_index))
            .collect()
    }

    /// Drop all cached parses.
    pub fn clear_cache(&self) {
        self.cache.write().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn parsed(
        &self,
        sentence: &str,
        delimiter: &DelimiterSpec,
        sentence_index: usize,
    ) -> Result<Arc<ParsedSentence>> {
        let key = (sentence_index, sentence.to_string(), delimiter.clone());

        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(parsed) = cache.get(&key) {
                return Ok(Arc::clone(parsed));
            }
        }

        debug!(sentence_index, "parse cache miss");
        let parsed = Arc::new(
            parser::parse(sentence, delimiter, sentence_index).map_err(|source| {
                ValidationError::Parse {
                    sentence_index,
                    source,
                }
            })?,
        );

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        Ok(Arc::clone(cache.entry(key).or_insert(parsed)))
    }
}

/// One-shot validation without a persistent parse cache.
pub fn validate(
    sentences: &[String],
    delimiter: &DelimiterSpec,
    answers: &[Vec<String>],
    config: &MatchConfig,
) -> Result<ValidationResult> {
    Validator::new().validate(sentences, delimiter, answers, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::types::FieldStatus;
    use pretty_assertions::assert_eq;

    fn sentences(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn answers(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|inner| inner.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn validates_batch_in_order() {
        let result = validate(
            &sentences(&[
                "The quick brown {fox} jumps over the lazy {dog}.",
                "My favorite color is {blue}.",
            ]),
            &DelimiterSpec::default(),
            &answers(&[&["fox", "cat"], &[""]]),
            &MatchConfig::default(),
        )
        .unwrap();

        assert_eq!(
            result,
            vec![
                vec![FieldStatus::Perfect, FieldStatus::False],
                vec![FieldStatus::Empty],
            ]
        );
    }

    #[test]
    fn empty_answer_to_empty_solution_is_empty_not_false() {
        let result = validate(
            &sentences(&["An empty field: {}"]),
            &DelimiterSpec::default(),
            &answers(&[&[""]]),
            &MatchConfig::default(),
        )
        .unwrap();
        assert_eq!(result, vec![vec![FieldStatus::Empty]]);

        // A non-empty answer against the blank solution misses: distance 1
        // against a zero budget.
        let result = validate(
            &sentences(&["An empty field: {}"]),
            &DelimiterSpec::default(),
            &answers(&[&["x"]]),
            &MatchConfig::default(),
        )
        .unwrap();
        assert_eq!(result, vec![vec![FieldStatus::False]]);
    }

    #[test]
    fn levenshtein_tolerance_applies() {
        let result = validate(
            &sentences(&["The {weather} is nice today."]),
            &DelimiterSpec::default(),
            &answers(&[&["wether"]]),
            &MatchConfig {
                ignore_accents: false,
                accepted_levenshtein_distance: 1,
            },
        )
        .unwrap();
        assert_eq!(result, vec![vec![FieldStatus::Acceptable]]);
    }

    #[test]
    fn accent_folding_with_tolerance() {
        let result = validate(
            &sentences(&["El {niño} juega en el parque."]),
            &DelimiterSpec::default(),
            &answers(&[&["ninos"]]),
            &MatchConfig {
                ignore_accents: true,
                accepted_levenshtein_distance: 2,
            },
        )
        .unwrap();
        assert_eq!(result, vec![vec![FieldStatus::Acceptable]]);
    }

    #[test]
    fn custom_token_delimiter_end_to_end() {
        let result = validate(
            &sentences(&["Paris is the capital of __France__."]),
            &DelimiterSpec::token("__").unwrap(),
            &answers(&[&["France"]]),
            &MatchConfig::default(),
        )
        .unwrap();
        assert_eq!(result, vec![vec![FieldStatus::Perfect]]);
    }

    #[test]
    fn too_few_answers_for_fields_fails() {
        let err = validate(
            &sentences(&["The quick brown {fox} jumps over the lazy {dog}."]),
            &DelimiterSpec::default(),
            &answers(&[&["fox"]]),
            &MatchConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Shape(ShapeError::FieldCount {
                sentence_index: 0,
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn sentence_count_mismatch_fails() {
        let err = validate(
            &sentences(&["{a}", "{b}"]),
            &DelimiterSpec::default(),
            &answers(&[&["a"]]),
            &MatchConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Shape(ShapeError::SentenceCount {
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn parse_failure_names_the_sentence() {
        let err = validate(
            &sentences(&["fine {here}", "broken {field"]),
            &DelimiterSpec::default(),
            &answers(&[&["here"], &[]]),
            &MatchConfig::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::Parse {
                sentence_index: 1,
                source: ParseError::UnterminatedField { offset: 7 },
            }
        );
    }

    #[test]
    fn cached_revalidation_matches_first_run() {
        let validator = Validator::new();
        let batch = sentences(&["The {weather} is nice today.", "{a}{b}"]);
        let delimiter = DelimiterSpec::default();
        let slots = answers(&[&["weather"], &["a", "x"]]);
        let config = MatchConfig::default();

        let first = validator.validate(&batch, &delimiter, &slots, &config).unwrap();
        let second = validator.validate(&batch, &delimiter, &slots, &config).unwrap();
        assert_eq!(first, second);

        validator.clear_cache();
        let third = validator.validate(&batch, &delimiter, &slots, &config).unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn same_sentence_at_two_positions_keeps_its_index() {
        let validator = Validator::new();
        let batch = sentences(&["{a}", "{a}"]);
        let parsed = validator
            .parse_sentences(&batch, &DelimiterSpec::default())
            .unwrap();
        assert_eq!(parsed[0].fields().next().unwrap().sentence_index, 0);
        assert_eq!(parsed[1].fields().next().unwrap().sentence_index, 1);
    }

    #[test]
    fn parse_sentences_exposes_render_structure() {
        let validator = Validator::new();
        let parsed = validator
            .parse_sentences(
                &sentences(&["An apple is a {fruit}, not a {vegetable}."]),
                &DelimiterSpec::default(),
            )
            .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].field_count(), 2);

        let json = serde_json::to_value(&*parsed[0]).unwrap();
        assert_eq!(json["parts"][0]["type"], "text");
        assert_eq!(json["parts"][1]["type"], "field");
        assert_eq!(json["parts"][1]["solution"], "fruit");
    }
}
