//! Infrastructure layer for the reco recommendation core
//!
//! Configuration loading (defaults, TOML file, `RECO_`-prefixed
//! environment variables), structured logging setup, and the factory
//! that wires configuration into concrete providers and use cases.

/// Configuration types and loader
pub mod config;
/// Provider and use-case wiring
pub mod factory;
/// Structured logging with tracing
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use factory::{RecoCore, build_core};
pub use logging::init_logging;
