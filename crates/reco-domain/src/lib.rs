//! Domain layer for the reco recommendation core
//!
//! Pure business types and contracts for embedding-based product
//! recommendation and search: value objects, vector math, the error
//! taxonomy, and the provider ports implemented by the outer layers.
//!
//! This crate performs no I/O. Everything that suspends (embedding
//! generation, index queries) is expressed as a port trait.

/// Error handling types
pub mod error;
/// Provider port traits
pub mod ports;
/// Vector math primitives
pub mod vector;
/// Domain value objects
pub mod value_objects;

pub use error::{Error, Result};
