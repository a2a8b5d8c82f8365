//! Stylometric profile assembly.
//!
//! Runs the statistics, readability, and complexity analyses for each
//! document and for the combined corpus, and assembles the results into one
//! serializable profile. This is the top of the crate: everything below it
//! is a pure function, so the profile for a given set of documents is
//! always the same.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::complexity::{self, ComplexityRecord};
use crate::error::{ProfileError, ProfileResult};
use crate::readability::{self, ReadabilityRecord};
use crate::statistics::{self, StatisticsRecord};

/// A named piece of source text.
///
/// Documents are value objects: once constructed they never change, so the
/// derived counts always agree with the text. Reading and decoding files
/// into strings is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    text: String,
}

impl Document {
    /// Create a document from a name and its full text.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Document name (file name, title, or other identifier).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace-separated word count.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Length in Unicode scalar values.
    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the document has any non-whitespace content.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Per-document slice of a profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DocumentProfile {
    /// Document name.
    pub name: String,
    /// Whitespace-separated word count.
    pub word_count: usize,
    /// Length in Unicode scalar values.
    pub character_count: usize,
    /// Lexical statistics for this document alone.
    pub statistics: StatisticsRecord,
}

/// Counts describing the profiled corpus.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProfileMetadata {
    /// Number of documents that contributed to the profile.
    pub document_count: usize,
    /// Character length of the combined corpus.
    pub combined_chars: usize,
}

/// Consolidated stylometric profile for one or more documents.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Profile {
    /// Corpus-level metadata.
    pub metadata: ProfileMetadata,
    /// One entry per contributing document, in input order.
    pub documents: Vec<DocumentProfile>,
    /// Lexical statistics over the combined corpus.
    pub corpus_statistics: StatisticsRecord,
    /// Readability indices over the combined corpus.
    pub corpus_readability: ReadabilityRecord,
    /// Complexity scores over the combined corpus.
    pub corpus_complexity: ComplexityRecord,
}

/// Build a stylometric profile from a set of documents.
///
/// Documents without scorable content are skipped with a warning; the rest
/// are analyzed individually and as one combined corpus, joined with blank
/// lines so document boundaries read as paragraph breaks. Errors only when
/// nothing scorable remains.
#[tracing::instrument(skip_all, fields(documents = documents.len()))]
pub fn build_profile(documents: &[Document]) -> ProfileResult<Profile> {
    let scorable: Vec<&Document> = documents
        .iter()
        .filter(|doc| {
            if doc.has_content() {
                true
            } else {
                tracing::warn!(document = doc.name(), "skipping document with no scorable text");
                false
            }
        })
        .collect();

    if scorable.is_empty() {
        return Err(ProfileError::NoValidDocuments);
    }

    let corpus = scorable
        .iter()
        .map(|doc| doc.text())
        .collect::<Vec<_>>()
        .join("\n\n");

    let document_profiles: Vec<DocumentProfile> = scorable
        .iter()
        .map(|doc| DocumentProfile {
            name: doc.name().to_string(),
            word_count: doc.word_count(),
            character_count: doc.character_count(),
            statistics: statistics::analyze(doc.text()),
        })
        .collect();

    let corpus_statistics = statistics::analyze(&corpus);
    let corpus_readability = readability::score(&corpus)?;
    let corpus_complexity = complexity::score(&corpus);

    tracing::debug!(
        documents = document_profiles.len(),
        corpus_chars = corpus.chars().count(),
        "profile assembled"
    );

    Ok(Profile {
        metadata: ProfileMetadata {
            document_count: document_profiles.len(),
            combined_chars: corpus.chars().count(),
        },
        documents: document_profiles,
        corpus_statistics,
        corpus_readability,
        corpus_complexity,
    })
}

/// Render the corpus with per-document origin headers.
///
/// Intended for downstream collaborators that show or prompt with the
/// combined text. Profile statistics are computed over the plain
/// concatenation instead, so the headers never inflate any count.
pub fn annotated_corpus(documents: &[Document]) -> String {
    documents
        .iter()
        .filter(|doc| doc.has_content())
        .map(|doc| format!("--- From {} ---\n{}", doc.name(), doc.text()))
        .collect::<Vec<_>>()
        .join("\n\n")
}
