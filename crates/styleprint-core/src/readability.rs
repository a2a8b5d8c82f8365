//! Readability index scoring.
//!
//! Computes Flesch Reading Ease, Flesch-Kincaid Grade Level, and the
//! Coleman-Liau Index from whitespace tokens, terminator-run sentences, and
//! heuristic syllable counts. Token lengths include attached punctuation;
//! the indices tolerate that and the counts stay consistent with the
//! statistics module.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::syllable;
use crate::text;

/// Standard readability indices for one text.
///
/// All fields are rounded to 2 decimals. Values are not clamped: degenerate
/// but non-empty input can land outside the conventional ranges, and that
/// is reported as-is.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityRecord {
    /// Flesch Reading Ease (higher = easier; ~0-100 for typical prose).
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level (US school grade).
    pub flesch_kincaid_grade: f64,
    /// Coleman-Liau Index (characters and sentences per word, no syllables).
    pub coleman_liau_index: f64,
    /// Mean words per sentence.
    pub avg_sentence_length: f64,
    /// Mean syllables per word.
    pub avg_syllables_per_word: f64,
}

/// Score the readability of text.
///
/// Returns [`AnalysisError::EmptyInput`] when segmentation finds no words
/// or no sentences; every other input produces a record.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score(text: &str) -> AnalysisResult<ReadabilityRecord> {
    let seg = text::segment(text);
    let words = seg.words.len();
    let sentences = seg.sentences.len();

    if words == 0 || sentences == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let syllables: usize = seg
        .words
        .iter()
        .map(|w| syllable::count_syllables(w))
        .sum();
    let token_chars: usize = seg.words.iter().map(|w| w.chars().count()).sum();

    let avg_sentence_length = words as f64 / sentences as f64;
    let avg_syllables_per_word = syllables as f64 / words as f64;

    let flesch_reading_ease =
        206.835 - 1.015 * avg_sentence_length - 84.6 * avg_syllables_per_word;
    let flesch_kincaid_grade =
        0.39f64.mul_add(avg_sentence_length, 11.8 * avg_syllables_per_word) - 15.59;

    // Coleman-Liau works on characters per 100 words (L) and sentences per
    // 100 words (S).
    let l = (token_chars as f64 / words as f64) * 100.0;
    let s = (sentences as f64 / words as f64) * 100.0;
    let coleman_liau_index = 0.0588 * l - 0.296 * s - 15.8;

    Ok(ReadabilityRecord {
        flesch_reading_ease: round2(flesch_reading_ease),
        flesch_kincaid_grade: round2(flesch_kincaid_grade),
        coleman_liau_index: round2(coleman_liau_index),
        avg_sentence_length: round2(avg_sentence_length),
        avg_syllables_per_word: round2(avg_syllables_per_word),
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monosyllabic_prose() {
        let record = score("The cat sat on the mat. The dog ran fast.").unwrap();
        assert_eq!(record.avg_sentence_length, 5.0);
        assert_eq!(record.avg_syllables_per_word, 1.0);
        assert_eq!(record.flesch_reading_ease, 117.16);
        assert_eq!(record.flesch_kincaid_grade, -1.84);
        assert_eq!(record.coleman_liau_index, -2.9);
    }

    #[test]
    fn complex_prose_scores_harder() {
        let simple = score("The cat sat. The dog ran.").unwrap();
        let complex = score(
            "The comprehensive organizational restructuring initiative \
             necessitated interdepartmental communication protocols.",
        )
        .unwrap();
        assert!(complex.flesch_reading_ease < simple.flesch_reading_ease);
        assert!(complex.flesch_kincaid_grade > simple.flesch_kincaid_grade);
        assert!(complex.coleman_liau_index > simple.coleman_liau_index);
    }

    #[test]
    fn empty_input_errors() {
        assert!(matches!(score(""), Err(AnalysisError::EmptyInput)));
        assert!(matches!(score("   \n\t"), Err(AnalysisError::EmptyInput)));
    }

    #[test]
    fn single_word_without_terminator() {
        // The unterminated tail counts as one sentence.
        let record = score("Stop").unwrap();
        assert_eq!(record.avg_sentence_length, 1.0);
        assert_eq!(record.avg_syllables_per_word, 1.0);
    }

    #[test]
    fn indices_are_finite() {
        let record = score("Incomprehensibilities notwithstanding, onwards!").unwrap();
        assert!(record.flesch_reading_ease.is_finite());
        assert!(record.flesch_kincaid_grade.is_finite());
        assert!(record.coleman_liau_index.is_finite());
    }
}
