//! Application configuration
use crate::error::{CliError, Result};
use moodtune_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "moodtune.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,

    #[serde(default = "default_artwork")]
    pub artwork: ArtworkSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_store_file")]
    pub store_file: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_fallback_duration_secs")]
    pub fallback_duration_secs: u32,

    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtworkSettings {
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `moodtune.toml` is read if
    /// present. `MOODTUNE_` variables override both, with `__` between
    /// section and key (`MOODTUNE_PLAYBACK__TICK_INTERVAL_MS=500`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with MOODTUNE_)
        settings = settings.add_source(
            config::Environment::with_prefix("MOODTUNE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?.try_deserialize()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.store_file.trim().is_empty() {
            return Err(CliError::Config(
                "storage.store_file must not be empty".to_string(),
            ));
        }

        if self.playback.fallback_duration_secs == 0 {
            return Err(CliError::Config(
                "playback.fallback_duration_secs must be greater than zero".to_string(),
            ));
        }

        if self.playback.tick_interval_ms == 0 {
            return Err(CliError::Config(
                "playback.tick_interval_ms must be greater than zero".to_string(),
            ));
        }

        if self.artwork.cache_size == 0 {
            return Err(CliError::Config(
                "artwork.cache_size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Path of the key-value store file
    pub fn store_path(&self) -> PathBuf {
        self.storage.data_dir.join(&self.storage.store_file)
    }

    /// Playback settings in the form the playback crate takes
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            fallback_duration_secs: self.playback.fallback_duration_secs,
        }
    }

    /// Period of the progress ticker
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.playback.tick_interval_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            playback: default_playback(),
            artwork: default_artwork(),
        }
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
        store_file: default_store_file(),
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_store_file() -> String {
    "moodtune.json".to_string()
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        fallback_duration_secs: default_fallback_duration_secs(),
        tick_interval_ms: default_tick_interval_ms(),
    }
}

fn default_fallback_duration_secs() -> u32 {
    30
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_artwork() -> ArtworkSettings {
    ArtworkSettings {
        cache_size: default_cache_size(),
    }
}

fn default_cache_size() -> usize {
    64
}
