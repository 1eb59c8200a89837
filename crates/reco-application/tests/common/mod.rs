//! Shared test providers
//!
//! Small `EmbeddingProvider` implementations used across the
//! application-layer tests: a lookup-table provider for tests that need
//! exact vector geometry, a counting wrapper for cache assertions, and
//! an always-failing provider for fail-fast paths.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use reco_domain::error::{Error, Result};
use reco_domain::ports::EmbeddingProvider;
use reco_domain::value_objects::Embedding;
use reco_providers::embedding::NullEmbeddingProvider;

/// Provider backed by a fixed text-to-vector table
pub struct StaticEmbeddingProvider {
    table: HashMap<String, Vec<f32>>,
    dimensions: usize,
}

impl StaticEmbeddingProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            table: HashMap::new(),
            dimensions,
        }
    }

    pub fn with_entry<S: Into<String>>(mut self, text: S, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dimensions);
        self.table.insert(text.into(), vector);
        self
    }
}

#[async_trait]
impl EmbeddingProvider for StaticEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        texts
            .iter()
            .map(|text| {
                self.table
                    .get(text)
                    .cloned()
                    .map(|vector| Embedding {
                        vector,
                        model: "static-test".to_string(),
                        dimensions: self.dimensions,
                    })
                    .ok_or_else(|| Error::embedding(format!("no static vector for {text:?}")))
            })
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "static"
    }
}

/// Wrapper around the null provider that counts batch calls
pub struct CountingEmbeddingProvider {
    inner: NullEmbeddingProvider,
    batch_calls: AtomicUsize,
    texts_embedded: AtomicUsize,
}

impl CountingEmbeddingProvider {
    pub fn new() -> Self {
        Self {
            inner: NullEmbeddingProvider::with_dimensions(8),
            batch_calls: AtomicUsize::new(0),
            texts_embedded: AtomicUsize::new(0),
        }
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    pub fn texts_embedded(&self) -> usize {
        self.texts_embedded.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbeddingProvider for CountingEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.texts_embedded.fetch_add(texts.len(), Ordering::SeqCst);
        self.inner.embed_batch(texts).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn provider_name(&self) -> &str {
        "counting"
    }
}

/// Provider that fails every call, simulating an unreachable service
pub struct FailingEmbeddingProvider;

#[async_trait]
impl EmbeddingProvider for FailingEmbeddingProvider {
    async fn embed_batch(&self, _texts: &[String]) -> Result<Vec<Embedding>> {
        Err(Error::embedding("provider unavailable"))
    }

    fn dimensions(&self) -> usize {
        8
    }

    fn provider_name(&self) -> &str {
        "failing"
    }
}
