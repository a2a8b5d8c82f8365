//! Integration tests over the public API: profile assembly, serialization
//! round-trips, and determinism.

use styleprint_core::profile::{self, Document};
use styleprint_core::{Profile, ProfileError};

fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            "letters.txt",
            "Dear reader, this is a short note. It has two sentences.",
        ),
        Document::new(
            "journal.txt",
            "Today was long -- very long! Why does it feel that way?\n\n\
             Tomorrow will be better.",
        ),
    ]
}

#[test]
fn profile_covers_documents_and_corpus() {
    let docs = sample_documents();
    let profile = profile::build_profile(&docs).unwrap();

    assert_eq!(profile.metadata.document_count, 2);
    assert_eq!(profile.documents.len(), 2);
    assert_eq!(profile.documents[0].name, "letters.txt");
    assert_eq!(profile.documents[1].name, "journal.txt");

    let corpus_words: usize = profile.documents.iter().map(|d| d.word_count).sum();
    assert_eq!(profile.corpus_statistics.word_count, corpus_words);

    assert!(profile.corpus_statistics.lexical_diversity > 0.0);
    assert!(profile.corpus_statistics.lexical_diversity <= 1.0);
    assert!(profile.corpus_complexity.error.is_none());
    assert!(profile.corpus_readability.avg_sentence_length > 0.0);
}

#[test]
fn corpus_sentence_types_span_documents() {
    let docs = sample_documents();
    let profile = profile::build_profile(&docs).unwrap();
    let types = &profile.corpus_statistics.sentence_types;

    assert_eq!(types.declarative, 3);
    assert_eq!(types.exclamatory, 1);
    assert_eq!(types.interrogative, 1);
    assert_eq!(types.imperative, 0);
}

#[test]
fn profile_round_trips_through_json() {
    let profile = profile::build_profile(&sample_documents()).unwrap();

    let json = serde_json::to_string(&profile).unwrap();
    let restored: Profile = serde_json::from_str(&json).unwrap();

    let original = serde_json::to_value(&profile).unwrap();
    let reserialized = serde_json::to_value(&restored).unwrap();
    assert_eq!(original, reserialized);
}

#[test]
fn profiles_are_deterministic() {
    let docs = sample_documents();
    let first = serde_json::to_value(profile::build_profile(&docs).unwrap()).unwrap();
    let second = serde_json::to_value(profile::build_profile(&docs).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unscored_error_field_stays_out_of_json() {
    let profile = profile::build_profile(&sample_documents()).unwrap();
    let value = serde_json::to_value(&profile).unwrap();
    assert!(value["corpus_complexity"].get("error").is_none());
}

#[test]
fn empty_input_set_is_the_only_failure() {
    let err = profile::build_profile(&[]).unwrap_err();
    assert!(matches!(err, ProfileError::NoValidDocuments));
    assert_eq!(err.to_string(), "no valid documents could be analyzed");

    let blank = vec![Document::new("blank.txt", "\n \t")];
    assert!(profile::build_profile(&blank).is_err());
}

#[test]
fn annotated_corpus_matches_document_order() {
    let docs = sample_documents();
    let annotated = profile::annotated_corpus(&docs);

    assert!(annotated.starts_with("--- From letters.txt ---\n"));
    assert!(annotated.contains("\n\n--- From journal.txt ---\n"));
    assert!(annotated.ends_with("Tomorrow will be better."));
}
