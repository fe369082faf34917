//! Configuration management for the demo.

use serde::Deserialize;
use structer::{Environment, Field, ProcessEnv, Record};

/// The bundled example file, independent of the working directory.
pub const DEFAULT_ENV_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/example.env");

/// Demo configuration, populated from environment variables by structer
/// itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `.env` file loaded before the user record is populated
    pub env_file: String,
    /// Spaces per indentation level in the printed JSON
    pub indent: usize,
}

impl Record for Config {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("env_file", &mut self.env_file)
                .with_default(DEFAULT_ENV_FILE)
                .with_env("STRUCTER_ENV_FILE"),
            Field::new("indent", &mut self.indent)
                .with_default("4")
                .with_env("STRUCTER_INDENT"),
        ]
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(&ProcessEnv)
    }

    /// Load configuration from an arbitrary environment.
    pub fn load<E: Environment + ?Sized>(env: &E) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        structer::set_defaults_with(&mut config, env)?;
        Ok(config)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Populate(#[from] structer::Error),
}

/// Load `path` into the process environment.
///
/// Variables that are already set win over the file. A missing file is not an
/// error.
pub fn load_env_file(path: &str) -> Result<(), dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::info!("Loaded environment from {}", path);
            Ok(())
        }
        Err(err) if err.not_found() => {
            tracing::warn!("Environment file {} not found, using process environment", path);
            Ok(())
        }
        Err(err) => Err(err),
    }
}
