//! Configuration management
//!
//! Typed configuration sections plus a figment-based loader that merges
//! defaults, a TOML file, and prefixed environment variables.

/// Configuration loader
pub mod loader;
/// Configuration section types
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, CacheConfig, EmbeddingConfig, EmbeddingProviderKind, LoggingConfig, SearchConfig,
};
