//! Catalog Indexer
//!
//! Keeps the similarity index in step with the catalog: embeds a
//! product's canonical text and upserts the result under the product
//! id. Versions increase monotonically per id so a recompute that loses
//! a race cannot clobber newer text.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::gateway::EmbeddingGateway;
use reco_domain::error::{Error, Result};
use reco_domain::ports::VectorIndex;
use reco_domain::value_objects::{CanonicalText, Embedding, ProductAttributes};

/// Indexing use case: canonical text -> embedding -> index upsert
pub struct CatalogIndexer {
    gateway: Arc<EmbeddingGateway>,
    index: Arc<dyn VectorIndex>,
    versions: DashMap<String, u64>,
}

impl CatalogIndexer {
    /// Create an indexer over the given gateway and index
    pub fn new(gateway: Arc<EmbeddingGateway>, index: Arc<dyn VectorIndex>) -> Self {
        Self {
            gateway,
            index,
            versions: DashMap::new(),
        }
    }

    /// Allocate the next text revision for an entity
    fn next_version(&self, id: &str) -> u64 {
        let mut entry = self.versions.entry(id.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Index (or re-index) a single product.
    ///
    /// Fails fast on embedding errors: nothing is inserted when the
    /// provider call fails.
    pub async fn index_product(&self, id: &str, attributes: &ProductAttributes) -> Result<()> {
        let embedding = self.gateway.embed_entity(attributes).await?;
        let version = self.next_version(id);
        self.index.upsert(id, embedding, version).await?;
        debug!(id, version, "product indexed");
        Ok(())
    }

    /// Index a batch of products.
    ///
    /// Embeddings are fetched in one atomic batch; a provider failure
    /// indexes nothing.
    pub async fn index_products(&self, products: &[(String, ProductAttributes)]) -> Result<()> {
        if products.is_empty() {
            return Ok(());
        }

        let texts: Vec<String> = products
            .iter()
            .map(|(_, attributes)| attributes.canonical_text())
            .collect();
        let embeddings = self.gateway.embed_many(&texts).await?;

        for ((id, _), embedding) in products.iter().zip(embeddings) {
            let version = self.next_version(id);
            self.index.upsert(id, embedding, version).await?;
        }

        info!(count = products.len(), "product batch indexed");
        Ok(())
    }

    /// Remove a product from the index. Idempotent.
    pub async fn remove_product(&self, id: &str) -> Result<()> {
        self.index.remove(id).await?;
        debug!(id, "product removed from index");
        Ok(())
    }

    /// Fetch the stored embedding for a product, asserting presence
    pub async fn embedding_of(&self, id: &str) -> Result<Embedding> {
        self.index
            .get(id)
            .await?
            .ok_or_else(|| Error::not_indexed(id))
    }

    /// Number of indexed products
    pub async fn indexed_count(&self) -> Result<usize> {
        self.index.len().await
    }
}
