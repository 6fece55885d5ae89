//! Answer matching: Levenshtein distance and field status classification.

use crate::normalize::normalize;
use crate::types::{FieldStatus, MatchConfig};

/// Classic edit distance over Unicode scalar values.
///
/// Insertions, deletions, and substitutions each cost 1. Computed with a
/// rolling two-row buffer instead of the full matrix.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let source: Vec<char> = a.chars().collect();
    let target: Vec<char> = b.chars().collect();

    if source.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return source.len();
    }

    let mut prev: Vec<usize> = (0..=target.len()).collect();
    let mut curr = vec![0; target.len() + 1];

    for (i, sc) in source.iter().enumerate() {
        curr[0] = i + 1;
        for (j, tc) in target.iter().enumerate() {
            let substitution = prev[j] + usize::from(sc != tc);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[target.len()]
}

/// Classify a user answer against the expected solution.
///
/// Precedence:
/// 1. A raw-empty answer is `Empty`, even when the solution is itself empty.
/// 2. Normalized equality is `Perfect`.
/// 3. Distance between the normalized forms within the configured tolerance
///    is `Acceptable`.
/// 4. Everything else is `False`.
///
/// Normalization runs before the distance so an accent-only discrepancy is
/// never charged against the edit budget.
pub fn classify(user_answer: &str, solution: &str, config: &MatchConfig) -> FieldStatus {
    if user_answer.is_empty() {
        return FieldStatus::Empty;
    }

    let answer = normalize(user_answer, config.ignore_accents);
    let expected = normalize(solution, config.ignore_accents);

    if answer == expected {
        return FieldStatus::Perfect;
    }

    if levenshtein_distance(&answer, &expected) <= config.accepted_levenshtein_distance {
        FieldStatus::Acceptable
    } else {
        FieldStatus::False
    }
}
