//! Unified error handling for the demo.

use crate::config::ConfigError;

/// Demo error type.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Environment file error: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Populate error: {0}")]
    Populate(#[from] structer::Error),

    #[error("Render error: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type alias for the demo.
pub type Result<T> = std::result::Result<T, DemoError>;
