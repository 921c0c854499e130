// Configuration loading and parsing (drawings.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// drawings.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub drawings: DrawingsConfig,
    pub storage: StorageConfig,
}

/// The `[drawings]` table: shape of the group assignment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DrawingsConfig {
    pub group_count: usize,
    pub teams_per_group: usize,
}

impl Default for DrawingsConfig {
    fn default() -> Self {
        DrawingsConfig {
            group_count: 8,
            teams_per_group: 8,
        }
    }
}

/// The `[storage]` table: where the team list and results live on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory all storage names are resolved against.
    pub directory: String,
    /// File the serialized group assignment is written to.
    pub results_file: String,
    /// JSON file the team list is read from.
    pub teams_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            directory: "data".into(),
            results_file: "drawings_results.txt".into(),
            teams_file: "teams.json".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from the given file path.
///
/// A missing file is not an error: the built-in defaults (8 groups of 8)
/// apply, matching a config manager seeded with defaults. A present but
/// malformed file, or one that fails validation, is fatal.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let config = if path.exists() {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?
    } else {
        Config::default()
    };

    validate(&config)?;
    Ok(config)
}

/// Convenience wrapper: loads `config/drawings.toml` relative to the current
/// working directory.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(Path::new("config/drawings.toml"))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.drawings.group_count == 0 {
        return Err(ConfigError::ValidationError {
            field: "drawings.group_count".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.drawings.teams_per_group == 0 {
        return Err(ConfigError::ValidationError {
            field: "drawings.teams_per_group".into(),
            message: "must be greater than 0".into(),
        });
    }

    let names: &[(&str, &str)] = &[
        ("storage.directory", &config.storage.directory),
        ("storage.results_file", &config.storage.results_file),
        ("storage.teams_file", &config.storage.teams_file),
    ];
    for (field, value) in names {
        if value.is_empty() {
            return Err(ConfigError::ValidationError {
                field: field.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
