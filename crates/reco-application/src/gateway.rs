//! Embedding Gateway
//!
//! Wraps the external embedding provider behind canonical-text
//! construction and an in-memory cache. Because canonical text is
//! byte-deterministic, the exact string doubles as the cache key.

use moka::future::Cache;
use std::sync::Arc;
use tracing::debug;

use reco_domain::error::Result;
use reco_domain::ports::EmbeddingProvider;
use reco_domain::value_objects::{CanonicalText, Embedding};

/// Default number of cached embeddings
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Gateway to the external embedding provider.
///
/// Calls the provider once per distinct text and serves repeats from the
/// cache. Provider failures are surfaced to the caller verbatim and are
/// never replaced with a default vector.
pub struct EmbeddingGateway {
    provider: Arc<dyn EmbeddingProvider>,
    cache: Cache<String, Embedding>,
}

impl EmbeddingGateway {
    /// Create a gateway with the default cache capacity
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self::with_cache_capacity(provider, DEFAULT_CACHE_CAPACITY)
    }

    /// Create a gateway with a custom cache capacity
    pub fn with_cache_capacity(provider: Arc<dyn EmbeddingProvider>, capacity: u64) -> Self {
        Self {
            provider,
            cache: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Dimensionality of embeddings produced by the underlying provider
    pub fn dimensions(&self) -> usize {
        self.provider.dimensions()
    }

    /// Embed a raw text, consulting the cache first
    pub async fn embed_text(&self, text: &str) -> Result<Embedding> {
        if let Some(hit) = self.cache.get(text).await {
            debug!(provider = self.provider.provider_name(), "embedding cache hit");
            return Ok(hit);
        }

        let embedding = self.provider.embed(text).await?;
        self.cache.insert(text.to_string(), embedding.clone()).await;
        Ok(embedding)
    }

    /// Embed an entity through its canonical text form
    pub async fn embed_entity<T: CanonicalText>(&self, entity: &T) -> Result<Embedding> {
        self.embed_text(&entity.canonical_text()).await
    }

    /// Embed many texts, preserving input order.
    ///
    /// Cached texts are served locally; the remainder goes to the
    /// provider in one batch. The batch is atomic: if the provider fails
    /// or responds partially, the whole call fails and nothing new is
    /// cached.
    pub async fn embed_many(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        let mut results: Vec<Option<Embedding>> = Vec::with_capacity(texts.len());
        let mut misses: Vec<(usize, String)> = Vec::new();

        for (position, text) in texts.iter().enumerate() {
            match self.cache.get(text).await {
                Some(hit) => results.push(Some(hit)),
                None => {
                    results.push(None);
                    misses.push((position, text.clone()));
                }
            }
        }

        if !misses.is_empty() {
            let miss_texts: Vec<String> = misses.iter().map(|(_, t)| t.clone()).collect();
            let fetched = self.provider.embed_batch(&miss_texts).await?;

            if fetched.len() != miss_texts.len() {
                return Err(reco_domain::Error::embedding(format!(
                    "batch count mismatch: expected {}, got {}",
                    miss_texts.len(),
                    fetched.len()
                )));
            }

            for ((position, text), embedding) in misses.into_iter().zip(fetched) {
                self.cache.insert(text, embedding.clone()).await;
                results[position] = Some(embedding);
            }
        }

        // Every slot is filled: hits up front, misses just above.
        results
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| reco_domain::Error::internal("unfilled embedding slot"))
            })
            .collect()
    }

    /// Number of cached embeddings
    pub async fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
