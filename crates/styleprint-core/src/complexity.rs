//! Composite text complexity scoring.
//!
//! Blends sentence length, vocabulary diversity, and a syllable-density
//! proxy into one 0-1 score. Failures never propagate: guard conditions
//! produce a zeroed record with an explanatory `error` note, so a batch
//! over many texts can partially succeed.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Words-per-sentence ceiling; sentences at or past it score 1.0.
const SENTENCE_LENGTH_CEILING: f64 = 20.0;

/// Mean-word-length ceiling in characters.
const WORD_LENGTH_CEILING: f64 = 8.0;

/// Composite complexity scores for one text.
///
/// The four score fields sit in [0, 1]. When the input cannot be scored,
/// `error` carries a note and every numeric field is zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ComplexityRecord {
    /// Sentence-length pressure against a 20-words-per-sentence ceiling, 3 decimals.
    pub sentence_complexity: f64,
    /// Vocabulary diversity blended with mean word length, 3 decimals.
    pub vocabulary_complexity: f64,
    /// Syllable-density proxy: 1.0 = monosyllabic, 0.0 = three or more
    /// syllables per word. 3 decimals.
    pub readability_score: f64,
    /// Weighted blend: 0.4 sentence + 0.4 vocabulary + 0.2 readability.
    pub overall_score: f64,
    /// Mean words per sentence, 1 decimal.
    pub avg_words_per_sentence: f64,
    /// Distinct normalized words over total words, 3 decimals.
    pub vocabulary_diversity: f64,
    /// Mean raw token length in characters, 1 decimal.
    pub avg_word_length: f64,
    /// Total word count.
    pub total_words: usize,
    /// Total sentence count.
    pub total_sentences: usize,
    /// Distinct normalized word count.
    pub unique_words: usize,
    /// Why the text could not be scored, when it could not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Score the complexity of text.
///
/// Total function: unscorable input produces a zeroed record whose `error`
/// field explains why, never an `Err` and never a panic.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn score(text: &str) -> ComplexityRecord {
    if text.trim().is_empty() {
        return unscorable("empty text provided");
    }

    let seg = text::segment(text);
    let words = seg.words.len();
    let sentences = seg.sentences.len();

    if words == 0 || sentences == 0 {
        return unscorable("insufficient text for analysis");
    }

    let avg_words_per_sentence = words as f64 / sentences as f64;
    let sentence_complexity = (avg_words_per_sentence / SENTENCE_LENGTH_CEILING).min(1.0);

    let normalized: HashSet<String> = seg
        .words
        .iter()
        .map(|w| text::normalize_token(w))
        .filter(|w| !w.is_empty())
        .collect();
    let unique_words = normalized.len();
    let vocabulary_diversity = unique_words as f64 / words as f64;

    let token_chars: usize = seg.words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = token_chars as f64 / words as f64;
    let vocabulary_complexity =
        0.6 * vocabulary_diversity + 0.4 * (avg_word_length / WORD_LENGTH_CEILING).min(1.0);

    // Letterless tokens contribute zero syllables but stay in the
    // denominator, so the mean can drop below 1; the clamp keeps the proxy
    // in range either way.
    let total_syllables: usize = seg.words.iter().map(|w| approximate_syllables(w)).sum();
    let avg_syllables_per_word = total_syllables as f64 / words as f64;
    let readability_score = 1.0 - ((avg_syllables_per_word - 1.0) / 2.0).clamp(0.0, 1.0);

    let overall_score =
        0.4 * sentence_complexity + 0.4 * vocabulary_complexity + 0.2 * readability_score;

    ComplexityRecord {
        sentence_complexity: round3(sentence_complexity),
        vocabulary_complexity: round3(vocabulary_complexity),
        readability_score: round3(readability_score),
        overall_score: round3(overall_score),
        avg_words_per_sentence: round1(avg_words_per_sentence),
        vocabulary_diversity: round3(vocabulary_diversity),
        avg_word_length: round1(avg_word_length),
        total_words: words,
        total_sentences: sentences,
        unique_words,
        error: None,
    }
}

/// Syllable approximation for the density proxy.
///
/// Coarser than [`crate::syllable::count_syllables`] on purpose: strips
/// non-letters, ignores `y`, and lets letterless tokens contribute zero.
/// The two heuristics are separate contracts and disagree on words like
/// "happy".
fn approximate_syllables(token: &str) -> usize {
    let lowered = token.to_lowercase();
    let cleaned: String = lowered
        .chars()
        .filter(char::is_ascii_alphabetic)
        .collect();
    if cleaned.is_empty() {
        return 0;
    }

    let mut runs: usize = 0;
    let mut previous_was_vowel = false;
    for ch in cleaned.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u');
        if is_vowel && !previous_was_vowel {
            runs += 1;
        }
        previous_was_vowel = is_vowel;
    }

    let mut syllables = runs.max(1);
    if cleaned.ends_with('e') {
        syllables = (syllables - 1).max(1);
    }
    syllables
}

fn unscorable(reason: &str) -> ComplexityRecord {
    ComplexityRecord {
        error: Some(reason.to_string()),
        ..ComplexityRecord::default()
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
