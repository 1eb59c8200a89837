//! Semantic Embedding Value Objects
//!
//! Value objects representing semantic embeddings for similarity
//! ranking and text search.

use serde::{Deserialize, Serialize};

/// Value Object: Semantic Text Embedding
///
/// Represents a vector embedding of text content that captures semantic
/// meaning. Embeddings are produced by an external provider and are the
/// foundation of recommendation and search ranking.
///
/// ## Business Rules
///
/// - Vector must contain at least one element
/// - All embeddings stored in one index share the same dimensionality
/// - Model name identifies the embedding generation method
///
/// ## Example
///
/// ```rust
/// use reco_domain::value_objects::Embedding;
///
/// let embedding = Embedding {
///     vector: vec![0.1, 0.2, 0.3, 0.4, 0.5],
///     model: "text-embedding-3-small".to_string(),
///     dimensions: 1536,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    /// The embedding vector values
    pub vector: Vec<f32>,
    /// Name of the model that generated this embedding
    pub model: String,
    /// Dimensionality of the embedding vector
    pub dimensions: usize,
}

impl Embedding {
    /// Length of the underlying vector
    pub fn len(&self) -> usize {
        self.vector.len()
    }

    /// Whether the underlying vector is empty
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }
}
