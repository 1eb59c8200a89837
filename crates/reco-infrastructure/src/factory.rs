//! Provider and use-case wiring
//!
//! Resolves configuration into concrete providers and assembles the
//! caller-facing use cases around one shared gateway and index.

use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::{AppConfig, EmbeddingProviderKind};
use reco_application::{CatalogIndexer, EmbeddingGateway, RecommendationEngine, SearchRanker};
use reco_domain::error::{Error, Result};
use reco_domain::ports::{EmbeddingProvider, VectorIndex};
use reco_providers::embedding::{NullEmbeddingProvider, OpenAiEmbeddingProvider};
use reco_providers::index::InMemoryVectorIndex;

/// The assembled recommendation core.
///
/// All use cases share one embedding gateway (so the cache is shared)
/// and one similarity index.
pub struct RecoCore {
    /// Catalog indexing operations
    pub indexer: Arc<CatalogIndexer>,
    /// Profile-based recommendations
    pub recommendations: Arc<RecommendationEngine>,
    /// Free-text search
    pub search: Arc<SearchRanker>,
}

/// Resolve the configured embedding provider
fn build_embedding_provider(config: &AppConfig) -> Result<Arc<dyn EmbeddingProvider>> {
    match config.embedding.provider {
        EmbeddingProviderKind::OpenAi => {
            let api_key = config
                .embedding
                .api_key
                .clone()
                .ok_or_else(|| Error::config("openai embedding provider requires an api_key"))?;
            let timeout = Duration::from_secs(config.embedding.timeout_secs);
            let http_client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| Error::config_with_source("failed to create HTTP client", e))?;

            Ok(Arc::new(OpenAiEmbeddingProvider::new(
                api_key,
                config.embedding.base_url.clone(),
                config.embedding.model.clone(),
                timeout,
                http_client,
            )))
        }
        EmbeddingProviderKind::Null => Ok(Arc::new(NullEmbeddingProvider::new())),
    }
}

/// Build the recommendation core from configuration
pub fn build_core(config: &AppConfig) -> Result<RecoCore> {
    let provider = build_embedding_provider(config)?;
    info!(
        provider = provider.provider_name(),
        dimensions = provider.dimensions(),
        "embedding provider resolved"
    );

    let gateway = Arc::new(EmbeddingGateway::with_cache_capacity(
        provider,
        config.cache.capacity,
    ));
    let index: Arc<dyn VectorIndex> = Arc::new(InMemoryVectorIndex::new());

    Ok(RecoCore {
        indexer: Arc::new(CatalogIndexer::new(gateway.clone(), index.clone())),
        recommendations: Arc::new(RecommendationEngine::new(gateway.clone(), index.clone())),
        search: Arc::new(SearchRanker::with_default_max_distance(
            gateway,
            index,
            config.search.default_max_distance,
        )),
    })
}
