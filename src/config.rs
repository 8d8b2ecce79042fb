use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WaymarkConfig {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub map: MapConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

/// Map geometry: the campus base coordinate and how far from it the map
/// accepts clicks. `bound_radius_km` is converted to degrees (~111 km per
/// degree) to form a square bound around the base point.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MapConfig {
    pub base_lat: f64,
    pub base_lng: f64,
    pub bound_radius_km: f64,
    /// Zoom floor for map frontends; inert for the terminal frontend.
    pub min_zoom: u8,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    /// Cosmetic delay before the assistant's reply is shown. Nothing awaits
    /// this in the core — frontends apply it at display time only.
    pub reply_delay_ms: u64,
}

impl Default for WaymarkConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            storage: StorageConfig::default(),
            map: MapConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_waymark_dir()
            .join("campus.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            base_lat: 13.0100751,
            base_lng: 76.1205015,
            bound_radius_km: 2.0,
            min_zoom: 15,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { reply_delay_ms: 400 }
    }
}

/// Returns `~/.waymark/`
pub fn default_waymark_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".waymark")
}

/// Returns the default config file path: `~/.waymark/config.toml`
pub fn default_config_path() -> PathBuf {
    default_waymark_dir().join("config.toml")
}

impl WaymarkConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            WaymarkConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (WAYMARK_DB, WAYMARK_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WAYMARK_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("WAYMARK_LOG_LEVEL") {
            self.app.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
