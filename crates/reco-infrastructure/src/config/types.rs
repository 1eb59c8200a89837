//! Configuration section types

use serde::{Deserialize, Serialize};

/// Embedding provider backends
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProviderKind {
    /// OpenAI embedding API
    OpenAi,
    /// Deterministic offline provider (tests, development)
    Null,
}

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Which provider backend to use
    pub provider: EmbeddingProviderKind,

    /// API key for remote providers
    pub api_key: Option<String>,

    /// Custom base URL for remote providers
    pub base_url: Option<String>,

    /// Model name
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProviderKind::OpenAi,
            api_key: None,
            base_url: None,
            model: "text-embedding-3-small".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Embedding cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached embeddings
    pub capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { capacity: 10_000 }
    }
}

/// Search and recommendation tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Default radius cutoff for text search (cosine distance)
    pub default_max_distance: f64,

    /// Default result list size
    pub default_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_max_distance: 0.5,
            default_limit: 10,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Emit JSON-formatted log lines
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Embedding provider settings
    pub embedding: EmbeddingConfig,

    /// Embedding cache settings
    pub cache: CacheConfig,

    /// Search and recommendation tuning
    pub search: SearchConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
