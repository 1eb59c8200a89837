//! Search Ranker
//!
//! Ranks indexed products against a free-text query, bounded by a
//! cosine-distance radius. An empty result is the normal "no matches"
//! outcome and is distinct from a provider failure, which surfaces as
//! an error.

use std::sync::Arc;
use tracing::debug;

use crate::gateway::EmbeddingGateway;
use reco_domain::error::Result;
use reco_domain::ports::{QueryOptions, VectorIndex};
use reco_domain::value_objects::ScoredCandidate;

/// Default radius cutoff. A tunable, not a load-bearing constant.
pub const DEFAULT_MAX_DISTANCE: f64 = 0.5;

/// Radius-bounded text search use case
pub struct SearchRanker {
    gateway: Arc<EmbeddingGateway>,
    index: Arc<dyn VectorIndex>,
    default_max_distance: f64,
}

impl SearchRanker {
    /// Create a ranker with the default radius
    pub fn new(gateway: Arc<EmbeddingGateway>, index: Arc<dyn VectorIndex>) -> Self {
        Self::with_default_max_distance(gateway, index, DEFAULT_MAX_DISTANCE)
    }

    /// Create a ranker with a custom default radius
    pub fn with_default_max_distance(
        gateway: Arc<EmbeddingGateway>,
        index: Arc<dyn VectorIndex>,
        default_max_distance: f64,
    ) -> Self {
        Self {
            gateway,
            index,
            default_max_distance,
        }
    }

    /// Search for products within `max_distance` of the query text.
    ///
    /// Candidates with `1 - score > max_distance` are excluded; the rest
    /// come back ordered by similarity descending, at most `k` of them.
    /// `max_distance = None` uses the ranker's configured default.
    pub async fn search(
        &self,
        query_text: &str,
        max_distance: Option<f64>,
        k: usize,
    ) -> Result<Vec<ScoredCandidate>> {
        let radius = max_distance.unwrap_or(self.default_max_distance);
        let query_embedding = self.gateway.embed_text(query_text).await?;

        let matches = self
            .index
            .query_top_k(
                &query_embedding.vector,
                k,
                QueryOptions::within_distance(radius),
            )
            .await?;

        debug!(radius, returned = matches.len(), "search complete");
        Ok(matches)
    }
}
