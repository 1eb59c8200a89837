//! Provider Port Traits
//!
//! Contracts implemented by the provider layer. The domain depends only
//! on these traits, never on a concrete embedding service or index
//! backend.

/// Embedding provider port
pub mod embedding;
/// Vector index port
pub mod vector_index;

pub use embedding::EmbeddingProvider;
pub use vector_index::{QueryOptions, VectorIndex};
