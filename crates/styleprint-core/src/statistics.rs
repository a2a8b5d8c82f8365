//! Lexical statistics.
//!
//! Frequency, punctuation, sentence-type, and diversity statistics over a
//! single text. Total function: degenerate input produces an all-zero
//! record rather than an error.
//!
//! Two different token normalizations are in play, on purpose: the
//! frequency table trims boundary punctuation, while `unique_words` only
//! lower-cases, so `"sat"` and `"sat."` stay distinct there.

use std::collections::{HashMap, HashSet};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Number of entries kept in the word frequency table.
const FREQUENCY_CAP: usize = 20;

/// A word and its occurrence count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WordCount {
    /// The normalized word.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Punctuation tallies over the whole text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PunctuationCounts {
    /// Comma occurrences.
    pub commas: usize,
    /// Period occurrences, including those inside ellipses and numbers.
    pub periods: usize,
    /// Semicolon occurrences.
    pub semicolons: usize,
    /// Colon occurrences.
    pub colons: usize,
    /// Exclamation mark occurrences.
    pub exclamations: usize,
    /// Question mark occurrences.
    pub questions: usize,
    /// Em dashes plus double-hyphen dashes.
    pub dashes: usize,
    /// Opening parentheses, counting each pair once.
    pub parentheses: usize,
}

/// Sentence counts by final punctuation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SentenceTypes {
    /// Sentences ending in `.`.
    pub declarative: usize,
    /// Sentences ending in `?`.
    pub interrogative: usize,
    /// Sentences ending in `!`.
    pub exclamatory: usize,
    /// Always 0: imperative detection needs syntactic analysis, which is
    /// out of scope. The field stays so the four-type shape survives
    /// serialization.
    pub imperative: usize,
}

/// Lexical statistics for one text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StatisticsRecord {
    /// Whitespace-separated word count.
    pub word_count: usize,
    /// Sentence count.
    pub sentence_count: usize,
    /// Paragraph count.
    pub paragraph_count: usize,
    /// Length in Unicode scalar values, whitespace included.
    pub character_count: usize,
    /// Mean words per sentence, 2 decimals.
    pub avg_words_per_sentence: f64,
    /// Mean sentences per paragraph, 2 decimals.
    pub avg_sentences_per_paragraph: f64,
    /// Top words by frequency, capped at 20, ties in first-seen order.
    pub word_frequency: Vec<WordCount>,
    /// Punctuation tallies.
    pub punctuation_counts: PunctuationCounts,
    /// Sentence-type tallies.
    pub sentence_types: SentenceTypes,
    /// Distinct lower-cased words, boundary punctuation kept.
    pub unique_words: usize,
    /// `unique_words / word_count`, 3 decimals, in [0, 1].
    pub lexical_diversity: f64,
}

/// Compute lexical statistics for a text.
///
/// Empty or whitespace-only input yields the all-zero record; no input
/// panics or errors.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> StatisticsRecord {
    if text.trim().is_empty() {
        return StatisticsRecord::default();
    }

    let seg = text::segment(text);
    let word_count = seg.words.len();
    let sentence_count = seg.sentences.len();
    let paragraph_count = seg.paragraphs.len();

    let unique_words = seg
        .words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    StatisticsRecord {
        word_count,
        sentence_count,
        paragraph_count,
        character_count: text.chars().count(),
        avg_words_per_sentence: round2(ratio(word_count, sentence_count)),
        avg_sentences_per_paragraph: round2(ratio(sentence_count, paragraph_count)),
        word_frequency: word_frequency(&seg.words),
        punctuation_counts: count_punctuation(text),
        sentence_types: classify_sentences(&seg.sentences),
        unique_words,
        lexical_diversity: round3(ratio(unique_words, word_count)),
    }
}

/// Top words by frequency: lower-cased, boundary punctuation trimmed,
/// tokens that trim away entirely dropped. Ties keep first-seen order, so
/// equal inputs always produce an identical table.
fn word_frequency(words: &[&str]) -> Vec<WordCount> {
    let mut order: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for token in words {
        let normalized = text::normalize_token(token);
        if normalized.is_empty() {
            continue;
        }
        match order.get(&normalized) {
            Some(&idx) => counts[idx].count += 1,
            None => {
                order.insert(normalized.clone(), counts.len());
                counts.push(WordCount {
                    word: normalized,
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(FREQUENCY_CAP);
    counts
}

fn count_punctuation(text: &str) -> PunctuationCounts {
    PunctuationCounts {
        commas: text.matches(',').count(),
        periods: text.matches('.').count(),
        semicolons: text.matches(';').count(),
        colons: text.matches(':').count(),
        exclamations: text.matches('!').count(),
        questions: text.matches('?').count(),
        dashes: text.matches('\u{2014}').count() + text.matches("--").count(),
        parentheses: text.matches('(').count(),
    }
}

fn classify_sentences(sentences: &[&str]) -> SentenceTypes {
    let mut types = SentenceTypes::default();
    for sentence in sentences {
        match sentence.chars().last() {
            Some('.') => types.declarative += 1,
            Some('?') => types.interrogative += 1,
            Some('!') => types.exclamatory += 1,
            // Unterminated tail sentences have no type.
            _ => {}
        }
    }
    types
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
