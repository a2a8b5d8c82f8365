//! Deterministic text statistics and readability scoring.
//!
//! This crate is the analysis core of styleprint: it turns raw prose into
//! serializable statistical records without touching the network, the
//! filesystem, or any model inference. Same input, same record, every time.
//!
//! # Modules
//!
//! - [`text`] - Word, sentence, and paragraph segmentation
//! - [`syllable`] - Heuristic syllable estimation
//! - [`readability`] - Flesch, Flesch-Kincaid, and Coleman-Liau indices
//! - [`statistics`] - Frequency, punctuation, and diversity statistics
//! - [`complexity`] - Composite 0-1 complexity scoring
//! - [`profile`] - Per-document and corpus profile assembly
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use styleprint_core::profile::{self, Document};
//!
//! let docs = vec![
//!     Document::new("sample.txt", "The cat sat. The dog ran fast!"),
//! ];
//! let profile = profile::build_profile(&docs).expect("one scorable document");
//!
//! assert_eq!(profile.corpus_statistics.sentence_count, 2);
//! assert!(profile.corpus_complexity.overall_score <= 1.0);
//! ```
#![deny(unsafe_code)]

pub mod complexity;

pub mod error;

pub mod profile;

pub mod readability;

pub mod statistics;

pub mod syllable;

pub mod text;

pub use complexity::ComplexityRecord;

pub use error::{AnalysisError, AnalysisResult, ProfileError, ProfileResult};

pub use profile::{Document, DocumentProfile, Profile, ProfileMetadata};

pub use readability::ReadabilityRecord;

pub use statistics::{PunctuationCounts, SentenceTypes, StatisticsRecord, WordCount};

pub use text::Segmentation;
