//! Recommendation Engine
//!
//! Turns a user interest profile into a ranked list of candidate
//! products. The caller pre-filters the candidate pool (e.g., to
//! in-stock items); scoring is restricted to that pool inside the
//! index scan.

use std::sync::Arc;
use tracing::debug;

use crate::gateway::EmbeddingGateway;
use reco_domain::error::Result;
use reco_domain::ports::{QueryOptions, VectorIndex};
use reco_domain::value_objects::UserProfile;

/// Default number of recommendations returned
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Top-K recommendation use case
pub struct RecommendationEngine {
    gateway: Arc<EmbeddingGateway>,
    index: Arc<dyn VectorIndex>,
}

impl RecommendationEngine {
    /// Create an engine over the given gateway and index
    pub fn new(gateway: Arc<EmbeddingGateway>, index: Arc<dyn VectorIndex>) -> Self {
        Self { gateway, index }
    }

    /// Recommend up to `k` products from `pool` for the given profile.
    ///
    /// The profile is embedded on demand; an embedding failure fails the
    /// whole call (no partial or degraded list). When the pool holds
    /// fewer than `k` candidates all of them are returned, highest
    /// similarity first.
    pub async fn recommend(
        &self,
        profile: &UserProfile,
        pool: &[String],
        k: usize,
    ) -> Result<Vec<String>> {
        let profile_embedding = self.gateway.embed_entity(profile).await?;

        let candidates = self
            .index
            .query_top_k(
                &profile_embedding.vector,
                k,
                QueryOptions::restricted_to(pool.iter().cloned()),
            )
            .await?;

        debug!(
            pool = pool.len(),
            returned = candidates.len(),
            "recommendations computed"
        );
        Ok(candidates.into_iter().map(|c| c.id).collect())
    }

    /// Recommend with the default list size
    pub async fn recommend_default(
        &self,
        profile: &UserProfile,
        pool: &[String],
    ) -> Result<Vec<String>> {
        self.recommend(profile, pool, DEFAULT_RECOMMENDATIONS).await
    }
}
