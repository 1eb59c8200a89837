//! Embedding provider implementations
//!
//! Adapters implementing the [`reco_domain::ports::EmbeddingProvider`]
//! port. The OpenAI provider is the production path; the null provider
//! produces deterministic vectors for offline tests.

/// Deterministic offline provider for tests
pub mod null;
/// OpenAI embedding API provider
pub mod openai;

pub use null::NullEmbeddingProvider;
pub use openai::OpenAiEmbeddingProvider;

/// Default timeout for embedding API requests
pub const DEFAULT_EMBEDDING_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
