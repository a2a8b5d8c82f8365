//! Text segmentation.
//!
//! Splits raw text into words, sentences, and paragraphs. Every analysis
//! module builds on these splits, so their rules are deliberately small and
//! fixed: whitespace tokens, terminator-run sentences, blank-line
//! paragraphs.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for runs of sentence-terminating punctuation.
static TERMINATOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Punctuation trimmed from token boundaries when normalizing vocabulary.
///
/// Narrower than "all punctuation" on purpose: apostrophes and hyphens stay
/// part of the word.
pub const BOUNDARY_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', '"', ';', ':', '(', ')', '[', ']', '{', '}',
];

/// Word, sentence, and paragraph slices of one input text.
///
/// All slices borrow from the input. Sentences keep their trailing
/// terminator run attached so callers can classify them by final character.
#[derive(Debug, Clone)]
pub struct Segmentation<'a> {
    /// Whitespace-separated tokens, in order, unmodified.
    pub words: Vec<&'a str>,
    /// Trimmed, non-empty sentences.
    pub sentences: Vec<&'a str>,
    /// Trimmed, non-empty paragraphs.
    pub paragraphs: Vec<&'a str>,
}

/// Segment text into words, sentences, and paragraphs.
///
/// Empty or whitespace-only input yields three empty sequences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn segment(text: &str) -> Segmentation<'_> {
    Segmentation {
        words: split_words(text),
        sentences: split_sentences(text),
        paragraphs: split_paragraphs(text),
    }
}

/// Split text into raw words on Unicode whitespace.
///
/// Tokens are not lowercased and punctuation is not stripped; each
/// downstream metric applies its own normalization.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on runs of `.`, `!`, `?`.
///
/// Each sentence spans from the end of the previous terminator run through
/// the end of its own, so `"Wait?!"` comes back as one sentence ending in
/// `!`. A run with nothing but whitespace before it (a freestanding
/// ellipsis, say) terminates no sentence and is dropped. Text after the
/// final run becomes a last, unterminated sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in TERMINATOR_PATTERN.find_iter(text) {
        // A freestanding run terminates nothing.
        if !text[start..m.start()].trim().is_empty() {
            push_trimmed(&mut sentences, &text[start..m.end()]);
        }
        start = m.end();
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

/// Split text into paragraphs (separated by blank lines).
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Lower-case a token and trim boundary punctuation from both ends.
///
/// May return an empty string for tokens made entirely of boundary
/// punctuation.
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .trim_matches(BOUNDARY_PUNCTUATION)
        .to_string()
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}
