//! CLI configuration
//!
//! Layered like the server configuration: built-in defaults, then an optional
//! TOML file, then `TYPED_VALUES_*` environment variables.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory
const DEFAULT_FILE: &str = "typed-values";

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per result
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// Effective CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub output: OutputFormat,

    /// Use tolerant construction for `normalize` and `collect` by default
    #[serde(default)]
    pub tolerant: bool,

    /// Log filter used when no `-v` flag is given (e.g. "info", "typed_values=debug")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Load configuration from defaults, file and environment
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with(path, environment())
    }

    fn load_with(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_FILE).required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("output", "text")?
            .set_default("tolerant", false)?
            .add_source(file)
            // Override with environment variables (e.g., TYPED_VALUES_LOG_LEVEL)
            .add_source(environment);

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn environment() -> config::Environment {
    // Double underscore separates nested keys so `log_level` stays one key
    config::Environment::with_prefix("TYPED_VALUES")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
