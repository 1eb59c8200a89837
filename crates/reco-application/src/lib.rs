//! Application layer for the reco recommendation core
//!
//! Use cases composing the domain ports: canonical-text embedding with
//! caching, catalog indexing, top-K recommendation, and radius-bounded
//! text search.

/// Canonical-text embedding gateway with caching
pub mod gateway;
/// Catalog indexing use case
pub mod indexer;
/// Top-K recommendation use case
pub mod recommend;
/// Radius-bounded text search use case
pub mod search;

pub use gateway::EmbeddingGateway;
pub use indexer::CatalogIndexer;
pub use recommend::RecommendationEngine;
pub use search::SearchRanker;
