//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment
//! variables, and default values, merged through figment.

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::AppConfig;
use reco_domain::error::{Error, Result};

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "reco.toml";
/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "RECO";

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources.
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with the `RECO_` prefix, nested keys
    ///    separated by a double underscore
    ///    (e.g., `RECO_EMBEDDING__MODEL`, `RECO_SEARCH__DEFAULT_LIMIT`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let candidate = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
        if candidate.exists() {
            figment = figment.merge(Toml::file(&candidate));
            info!("configuration loaded from {}", candidate.display());
        } else if self.config_path.is_some() {
            warn!("configuration file not found: {}", candidate.display());
        }

        // Double underscore separates nested keys so single underscores
        // inside field names stay addressable
        // (RECO_SEARCH__DEFAULT_MAX_DISTANCE -> search.default_max_distance)
        figment = figment.merge(Env::prefixed(&format!("{CONFIG_ENV_PREFIX}_")).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .map_err(|e| Error::config_with_source("failed to extract configuration", e))?;

        Self::validate(&app_config)?;
        Ok(app_config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .map_err(|e| Error::config_with_source("failed to serialize config to TOML", e))?;

        std::fs::write(path.as_ref(), toml_string)
            .map_err(|e| Error::config_with_source("failed to write config file", e))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Validate extracted configuration values
    fn validate(config: &AppConfig) -> Result<()> {
        crate::logging::parse_log_level(&config.logging.level)?;

        if config.embedding.timeout_secs == 0 {
            return Err(Error::config("embedding.timeout_secs must be positive"));
        }
        if config.cache.capacity == 0 {
            return Err(Error::config("cache.capacity must be positive"));
        }
        if config.search.default_limit == 0 {
            return Err(Error::config("search.default_limit must be positive"));
        }
        // Cosine distance ranges over [0, 2]
        if !(0.0..=2.0).contains(&config.search.default_max_distance) {
            return Err(Error::config(
                "search.default_max_distance must lie in [0, 2]",
            ));
        }

        Ok(())
    }
}
