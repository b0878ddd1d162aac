//! Application configuration file support.
//!
//! Settings come from an optional `hotel-insights.toml` file and are then
//! overridden by environment variables.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InsightsError, InsightsResult};
use crate::parsing::InvalidRowPolicy;
use crate::store::LoadOptions;

pub const CONFIG_FILE_NAME: &str = "hotel-insights.toml";

pub const ENV_DATA_PATH: &str = "HOTEL_INSIGHTS_DATA";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_STRICT_MONTHS: &str = "HOTEL_INSIGHTS_STRICT_MONTHS";
pub const ENV_PREVIEW_ROWS: &str = "HOTEL_INSIGHTS_PREVIEW_ROWS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub views: ViewSettings,
}

/// Where the bookings come from and how strictly they are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// Fail the load on an unrecognized month name instead of rejecting the
    /// row.
    #[serde(default)]
    pub strict_months: bool,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            strict_months: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default = "default_preview_rows")]
    pub default_preview_rows: usize,
    #[serde(default = "default_max_preview_rows")]
    pub max_preview_rows: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            default_preview_rows: default_preview_rows(),
            max_preview_rows: default_max_preview_rows(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/hotel_bookings.csv")
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_preview_rows() -> usize {
    10
}

fn default_max_preview_rows() -> usize {
    500
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> InsightsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            InsightsError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> InsightsResult<Self> {
        let config: AppConfig = toml::from_str(content)
            .map_err(|e| InsightsError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Search the standard locations for a config file.
    ///
    /// Looks for `hotel-insights.toml` in the current directory, in
    /// `backend/` and in the parent directory. Returns `None` if none exist.
    pub fn find_default_file() -> Option<PathBuf> {
        [
            PathBuf::from(CONFIG_FILE_NAME),
            Path::new("backend").join(CONFIG_FILE_NAME),
            Path::new("..").join(CONFIG_FILE_NAME),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Config from the default file (or built-in defaults when there is
    /// none), with environment overrides applied.
    pub fn load() -> InsightsResult<Self> {
        let mut config = match Self::find_default_file() {
            Some(path) => {
                log::info!("Reading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> InsightsResult<()> {
        self.apply_env_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides read through `lookup`, which maps a variable name to
    /// its value.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> InsightsResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATA_PATH) {
            self.dataset.path = PathBuf::from(path);
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .map_err(|_| InsightsError::config(format!("{} must be a valid port number", ENV_PORT)))?;
        }
        if let Some(strict) = lookup(ENV_STRICT_MONTHS) {
            self.dataset.strict_months = parse_bool(&strict).ok_or_else(|| {
                InsightsError::config(format!("{} must be true or false", ENV_STRICT_MONTHS))
            })?;
        }
        if let Some(rows) = lookup(ENV_PREVIEW_ROWS) {
            self.views.default_preview_rows = rows.parse().map_err(|_| {
                InsightsError::config(format!("{} must be a row count", ENV_PREVIEW_ROWS))
            })?;
        }
        self.validate()
    }

    pub fn validate(&self) -> InsightsResult<()> {
        if self.views.default_preview_rows > self.views.max_preview_rows {
            return Err(InsightsError::config(format!(
                "default_preview_rows ({}) exceeds max_preview_rows ({})",
                self.views.default_preview_rows, self.views.max_preview_rows
            )));
        }
        Ok(())
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            invalid_rows: if self.dataset.strict_months {
                InvalidRowPolicy::Fail
            } else {
                InvalidRowPolicy::Reject
            },
        }
    }

    /// Preview size for a request, clamped to the configured maximum.
    pub fn preview_rows(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.views.default_preview_rows)
            .min(self.views.max_preview_rows)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
