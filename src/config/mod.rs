//! Configuration management for cinemas.
//!
//! Configuration is read from `~/.config/cinemas/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schedule: ScheduleConfig,
    pub catalog: CatalogConfig,
    pub fetch: FetchConfig,
    pub server: ServerConfig,
    /// Append log events to this file in addition to stdout
    pub log_file: Option<PathBuf>,
}

/// Where the daily schedule comes from.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Schedule listing page, fetched with `view=list`
    pub url: String,
    /// Prefix for the relative `MovieScheduleUrl` links
    pub base_url: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            url: "https://www.afisha.ru/novosibirsk/schedule_cinema/".to_string(),
            base_url: "https://www.afisha.ru".to_string(),
        }
    }
}

/// Rating catalog endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Advanced search form
    pub search_url: String,
    /// Film pages live under `{film_url_base}/film/<id>`
    pub film_url_base: String,
    /// Rating document, `{id}` is replaced with the catalog identifier
    pub rating_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_url: "https://www.kinopoisk.ru/index.php".to_string(),
            film_url_base: "https://www.kinopoisk.ru".to_string(),
            rating_url: "https://rating.kinopoisk.ru/{id}.xml".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn film_url(&self, id: &str) -> String {
        format!("{}/film/{}", self.film_url_base.trim_end_matches('/'), id)
    }

    pub fn rating_url(&self, id: &str) -> String {
        self.rating_url.replace("{id}", id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Per-request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// Maximum concurrent enrichment workers (default: 10)
    pub workers: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            workers: crate::pipeline::DEFAULT_WORKERS,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// How long an enriched listing is served before the pipeline runs again
    pub cache_ttl_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8000,
            cache_ttl_secs: 600,
        }
    }
}

impl ServerConfig {
    pub fn cache_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.cache_ttl_secs as i64)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating it when missing.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Get the default config file path: `~/.config/cinemas/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("cinemas").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# cinemas configuration

# Uncomment to also write log events to a file
# log_file = "cinemas.log"

[schedule]
# Daily schedule listing, requested with ?view=list
url = "https://www.afisha.ru/novosibirsk/schedule_cinema/"
# Prefix for relative schedule links
base_url = "https://www.afisha.ru"

[catalog]
search_url = "https://www.kinopoisk.ru/index.php"
film_url_base = "https://www.kinopoisk.ru"
# {id} is replaced with the catalog identifier
rating_url = "https://rating.kinopoisk.ru/{id}.xml"

[fetch]
# Per-request timeout in seconds
timeout_secs = 10

# Maximum number of movies enriched at the same time
workers = 10

[server]
address = "127.0.0.1"
port = 8000

# Seconds an enriched listing is served from cache
cache_ttl_secs = 600
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
