//! Error taxonomy tests

use reco_domain::error::Error;

#[test]
fn dimension_mismatch_reports_both_lengths() {
    let err = Error::dimension_mismatch(1536, 384);
    assert_eq!(err.to_string(), "dimension mismatch: expected 1536, got 384");
}

#[test]
fn embedding_error_carries_the_provider_message() {
    let err = Error::embedding("OpenAI rate limit exceeded: slow down");
    assert!(err.to_string().contains("rate limit"));
}

#[test]
fn not_indexed_names_the_entity() {
    let err = Error::not_indexed("product-42");
    assert_eq!(err.to_string(), "entity not indexed: product-42");
}

#[test]
fn config_error_preserves_its_source() {
    let source = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
    let err = Error::config_with_source("failed to read config", source);
    assert!(std::error::Error::source(&err).is_some());
}
