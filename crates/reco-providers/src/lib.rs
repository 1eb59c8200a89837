//! Provider adapters for the reco recommendation core
//!
//! Concrete implementations of the domain ports: embedding providers
//! (OpenAI over HTTP, a deterministic null provider for offline tests)
//! and vector index backends (exact in-memory brute force).

/// Embedding provider implementations
pub mod embedding;
/// Vector index backends
pub mod index;

pub use embedding::{NullEmbeddingProvider, OpenAiEmbeddingProvider};
pub use index::InMemoryVectorIndex;
