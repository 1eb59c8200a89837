//! In-memory vector index implementation
//!
//! Exact brute-force cosine scoring over an owned id-to-embedding map.
//! Data is not persisted and will be lost on restart. Scoring every
//! entry is O(N * L) per query, which beats maintaining an approximate
//! index at catalog scale.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use reco_domain::error::{Error, Result};
use reco_domain::ports::{QueryOptions, VectorIndex};
use reco_domain::value_objects::{Embedding, ScoredCandidate};
use reco_domain::vector::{cosine_similarity_with_norm, magnitude};

/// Slack applied at the radius boundary. Self-similarity computed in
/// floating point lands within one ulp of 1.0 but not always exactly on
/// it, so a strict comparison at `max_distance = 0` would drop exact
/// matches.
const DISTANCE_EPSILON: f64 = 1e-9;

/// One indexed entity: its embedding plus the text revision it came from
struct IndexedEntry {
    embedding: Embedding,
    version: u64,
}

/// Interior state guarded by one lock.
///
/// The read guard held for the duration of a scan is what gives each
/// query its point-in-time snapshot; writers block until in-flight
/// scans finish.
#[derive(Default)]
struct IndexState {
    /// Established by the first upsert; every later vector must agree
    dimension: Option<usize>,
    entries: HashMap<String, IndexedEntry>,
}

/// In-memory vector index
///
/// Exclusively owns the mapping from entity identifier to embedding.
/// Updates are full replacements keyed by id; callers never mutate a
/// stored vector in place.
pub struct InMemoryVectorIndex {
    state: RwLock<IndexState>,
}

impl InMemoryVectorIndex {
    /// Create an empty index. The first upsert establishes its dimension.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(IndexState::default()),
        }
    }
}

impl Default for InMemoryVectorIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorIndex for InMemoryVectorIndex {
    async fn upsert(&self, id: &str, embedding: Embedding, version: u64) -> Result<bool> {
        if embedding.vector.is_empty() {
            return Err(Error::invalid_argument("embedding vector must be non-empty"));
        }

        let mut state = self.state.write().await;

        // Dimension check happens before any mutation, so a mismatch
        // leaves the index unchanged.
        match state.dimension {
            Some(expected) if expected != embedding.vector.len() => {
                return Err(Error::dimension_mismatch(expected, embedding.vector.len()));
            }
            Some(_) => {}
            None => state.dimension = Some(embedding.vector.len()),
        }

        if let Some(existing) = state.entries.get(id) {
            if existing.version > version {
                debug!(id, version, stored = existing.version, "stale upsert ignored");
                return Ok(false);
            }
        }

        state
            .entries
            .insert(id.to_string(), IndexedEntry { embedding, version });
        Ok(true)
    }

    async fn remove(&self, id: &str) -> Result<()> {
        let mut state = self.state.write().await;
        state.entries.remove(id);
        Ok(())
    }

    async fn query_top_k(
        &self,
        query: &[f32],
        k: usize,
        opts: QueryOptions,
    ) -> Result<Vec<ScoredCandidate>> {
        let state = self.state.read().await;

        let Some(dimension) = state.dimension else {
            // Empty index: nothing can match, and no dimension has been
            // established for the query to disagree with.
            return Ok(Vec::new());
        };
        if query.len() != dimension {
            return Err(Error::dimension_mismatch(dimension, query.len()));
        }

        let query_norm = magnitude(query);
        let mut candidates: Vec<ScoredCandidate> = Vec::new();

        for (id, entry) in &state.entries {
            if let Some(allowed) = &opts.restrict_to {
                if !allowed.contains(id) {
                    continue;
                }
            }

            let score = cosine_similarity_with_norm(query, &entry.embedding.vector, query_norm)?;

            if let Some(max_distance) = opts.max_distance {
                if 1.0 - score > max_distance + DISTANCE_EPSILON {
                    continue;
                }
            }

            candidates.push(ScoredCandidate::new(id.clone(), score));
        }

        // Score descending, ties by id ascending
        candidates.sort();
        candidates.truncate(k);

        debug!(
            k,
            returned = candidates.len(),
            scanned = state.entries.len(),
            "top-k query complete"
        );
        Ok(candidates)
    }

    async fn get(&self, id: &str) -> Result<Option<Embedding>> {
        let state = self.state.read().await;
        Ok(state.entries.get(id).map(|entry| entry.embedding.clone()))
    }

    async fn len(&self) -> Result<usize> {
        let state = self.state.read().await;
        Ok(state.entries.len())
    }

    async fn dimensions(&self) -> Result<Option<usize>> {
        let state = self.state.read().await;
        Ok(state.dimension)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
