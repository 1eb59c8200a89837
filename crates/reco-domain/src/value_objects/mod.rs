//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text for semantic ranking |
//! | [`ProductAttributes`] | Governing text fields of a catalog product |
//! | [`UserProfile`] | Query-side interest profile, embedded on demand |
//! | [`ScoredCandidate`] | Entity id paired with a similarity score |

/// Catalog entities and ranking value objects
pub mod catalog;
/// Semantic embedding value objects
pub mod embedding;

pub use catalog::{CanonicalText, ProductAttributes, ScoredCandidate, UserProfile};
pub use embedding::Embedding;
