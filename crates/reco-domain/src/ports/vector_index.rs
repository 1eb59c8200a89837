//! Vector index port

use crate::error::Result;
use crate::value_objects::{Embedding, ScoredCandidate};
use async_trait::async_trait;
use std::collections::HashSet;

/// Options for a top-K similarity query
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// Radius cutoff: candidates with `1 - score > max_distance` are
    /// excluded before truncation to k. `None` means pure top-K.
    pub max_distance: Option<f64>,
    /// Restrict scoring to this id allowlist (e.g., an in-stock
    /// candidate pool pre-filtered by the caller).
    pub restrict_to: Option<HashSet<String>>,
}

impl QueryOptions {
    /// Pure top-K query with no radius cutoff or pool restriction
    pub fn top_k() -> Self {
        Self::default()
    }

    /// Radius query excluding candidates farther than `max_distance`
    pub fn within_distance(max_distance: f64) -> Self {
        Self {
            max_distance: Some(max_distance),
            restrict_to: None,
        }
    }

    /// Restrict scoring to the given candidate pool
    pub fn restricted_to<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            max_distance: None,
            restrict_to: Some(ids.into_iter().map(Into::into).collect()),
        }
    }
}

/// Similarity Index Interface
///
/// Contract for the component that exclusively owns the mapping from
/// entity identifier to embedding and answers nearest-neighbor queries
/// under cosine similarity. The default backend is an exact brute-force
/// scan; an ANN structure can replace it behind this trait without
/// changing any other component's contract.
///
/// # Dimension Invariant
///
/// The first upsert establishes the index dimension. Every later upsert
/// and every query vector must agree with it; a mismatch fails with
/// `DimensionMismatch` and leaves the index unchanged.
///
/// # Snapshot Guarantee
///
/// A single `query_top_k` call observes a version of the data that
/// existed at one point in time. Concurrent upserts/removes are
/// serialized relative to in-flight scans.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Insert or replace the embedding for an entity.
    ///
    /// `version` is the monotonically increasing revision of the text
    /// that produced the embedding. An upsert carrying a version lower
    /// than the stored one is ignored and returns `Ok(false)`, so an
    /// out-of-order recompute cannot clobber newer text.
    async fn upsert(&self, id: &str, embedding: Embedding, version: u64) -> Result<bool>;

    /// Remove an entity. No-op if absent (idempotent).
    async fn remove(&self, id: &str) -> Result<()>;

    /// Top-K nearest neighbors of `query` under cosine similarity.
    ///
    /// Results are ordered by score descending, ties broken by id
    /// ascending, and truncated to at most `k` entries.
    async fn query_top_k(
        &self,
        query: &[f32],
        k: usize,
        opts: QueryOptions,
    ) -> Result<Vec<ScoredCandidate>>;

    /// Fetch the stored embedding for an entity, if present
    async fn get(&self, id: &str) -> Result<Option<Embedding>>;

    /// Number of indexed entities
    async fn len(&self) -> Result<usize>;

    /// Established dimension, or `None` while the index is empty and no
    /// upsert has fixed it yet
    async fn dimensions(&self) -> Result<Option<usize>>;

    /// Name/identifier of this index backend
    fn provider_name(&self) -> &str;
}
