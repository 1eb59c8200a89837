//! Embedding provider port

use crate::error::Result;
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Text-to-Vector Provider Interface
///
/// Contract for external services that transform text into semantic
/// embeddings. The core treats the provider as "text in, fixed-length
/// float array out, or an error" and owns none of its internals.
///
/// # Default Implementations
///
/// `embed()` delegates to `embed_batch()` with a single item. Providers
/// only need to implement `embed_batch()` unless a single-item
/// optimization is worthwhile.
///
/// # Failure Contract
///
/// A provider failure (timeout, quota, malformed response) must surface
/// as an error. Substituting a zero vector is disallowed: it would
/// collapse every downstream cosine score to the -1 sentinel and mask
/// real failures as "no match".
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Get the embedding for a single text
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| crate::error::Error::embedding("no embedding returned"))
    }

    /// Get embeddings for multiple texts, preserving input order.
    ///
    /// The batch is atomic: a partial provider response fails the whole
    /// call, so the caller never receives unset entries.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of embeddings produced by this provider
    fn dimensions(&self) -> usize;

    /// Name/identifier of this provider implementation
    fn provider_name(&self) -> &str;

    /// Health check for the provider
    async fn health_check(&self) -> Result<()> {
        self.embed("health check").await?;
        Ok(())
    }
}
