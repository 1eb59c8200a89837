//! Vector index backends
//!
//! Implementations of the [`reco_domain::ports::VectorIndex`] port. The
//! in-memory backend does an exact brute-force scan, which is the
//! intended default at catalog scale (tens of thousands of entities);
//! an ANN structure would slot in behind the same port.

/// Exact in-memory index
pub mod in_memory;

pub use in_memory::InMemoryVectorIndex;
