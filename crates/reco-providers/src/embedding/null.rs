//! Null embedding provider for testing and development
//!
//! Provides deterministic, hash-based embeddings for testing purposes.
//! No external dependencies - always works offline.

use async_trait::async_trait;

use reco_domain::error::Result;
use reco_domain::ports::EmbeddingProvider;
use reco_domain::value_objects::Embedding;

/// Default dimensionality of null embeddings (matches common small models)
pub const DIMENSION_NULL: usize = 384;

/// Null embedding provider for testing
///
/// Returns fixed-size vectors derived from a hash of the input text.
/// Identical texts always produce identical vectors, and every vector has
/// nonzero magnitude, so cosine scores stay well-defined. Useful for unit
/// tests and development without an actual embedding service.
///
/// # Example
///
/// ```rust
/// use reco_providers::embedding::NullEmbeddingProvider;
/// use reco_domain::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
pub struct NullEmbeddingProvider {
    dimensions: usize,
}

impl NullEmbeddingProvider {
    /// Create a provider emitting vectors of the default dimension
    pub fn new() -> Self {
        Self::with_dimensions(DIMENSION_NULL)
    }

    /// Create a provider emitting vectors of a custom dimension
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn synthesize(&self, text: &str) -> Vec<f32> {
        // FNV-1a over the text bytes seeds the vector
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in text.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }

        let seed = (hash % 10_000) as f32 / 10_000.0;
        (0..self.dimensions)
            .map(|j| {
                // Offset keeps every component strictly positive, so the
                // magnitude is never zero.
                let variation = ((seed * 97.0) + j as f32 * 0.1).sin() * 0.45;
                0.55 + variation
            })
            .collect()
    }
}

impl Default for NullEmbeddingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let embeddings = texts
            .iter()
            .map(|text| Embedding {
                vector: self.synthesize(text),
                model: "null-test".to_string(),
                dimensions: self.dimensions,
            })
            .collect();

        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
