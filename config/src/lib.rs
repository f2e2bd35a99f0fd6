//! Configuration loading for bazinga.
//!
//! Settings live in `~/.bazinga/config.toml` (or a path passed explicitly). A
//! missing default file is not an error; every field has a default.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use bazinga_types::VowelSet;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides `[vowels] set`.
pub const VOWELS_ENV: &str = "BAZINGA_VOWELS";

/// Log filter used when neither `BAZINGA_LOG` nor `[log] level` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BazingaConfig {
    pub vowels: Option<VowelsConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VowelsConfig {
    /// `"lowercase"` (default) or `"case-insensitive"`.
    #[serde(default)]
    pub set: VowelSet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// A `tracing_subscriber::EnvFilter` directive such as `"debug"`.
    pub level: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl BazingaConfig {
    /// Load from the default location. Returns `Ok(None)` if there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    /// Load from an explicit path. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(config)
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// Effective vowel set: `BAZINGA_VOWELS` if set and valid, else the file.
    #[must_use]
    pub fn vowel_set(&self) -> VowelSet {
        self.vowel_set_with_override(env::var(VOWELS_ENV).ok().as_deref())
    }

    /// Like [`Self::vowel_set`], with the environment value passed in.
    #[must_use]
    pub fn vowel_set_with_override(&self, env_value: Option<&str>) -> VowelSet {
        if let Some(raw) = env_value {
            match raw.parse::<VowelSet>() {
                Ok(set) => return set,
                Err(err) => tracing::warn!(env_var = VOWELS_ENV, "{err}; ignoring"),
            }
        }
        self.vowels.as_ref().map(|v| v.set).unwrap_or_default()
    }

    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log
            .as_ref()
            .and_then(|log| log.level.as_deref())
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".bazinga").join("config.toml"))
}
