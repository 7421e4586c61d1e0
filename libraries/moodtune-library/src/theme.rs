//! Light/dark theme preference

use crate::error::Result;
use moodtune_core::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Store key holding the theme mode
pub const THEME_KEY: &str = "theme";

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Colors used by every screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub accent: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub scrubber_bg: &'static str,
    pub scrubber_fill: &'static str,
    pub header: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#fff",
    text: "#191414",
    secondary_text: "#444",
    accent: "#1DB954",
    card: "#f2f2f2",
    border: "#e0e0e0",
    scrubber_bg: "#e0e0e0",
    scrubber_fill: "#1DB954",
    header: "#f9f9f9",
};

const DARK: Palette = Palette {
    background: "#191414",
    text: "#fff",
    secondary_text: "#b3b3b3",
    accent: "#1DB954",
    card: "#222",
    border: "rgba(255,255,255,0.1)",
    scrubber_bg: "#444",
    scrubber_fill: "#1DB954",
    header: "#121212",
};

impl ThemeMode {
    /// The other mode
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme mode: {}", other)),
        }
    }
}

/// Theme mode persisted in a key-value store
pub struct ThemePreference<S> {
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored mode; anything other than "light" is dark
    pub async fn load(&self) -> Result<ThemeMode> {
        let stored = self.store.get(THEME_KEY).await?;
        Ok(match stored.as_deref() {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        })
    }

    /// Switch modes and persist the new one
    pub async fn toggle(&self) -> Result<ThemeMode> {
        let mode = self.load().await?.toggled();
        self.store.set(THEME_KEY, mode.as_str()).await?;
        debug!(theme = %mode, "Theme toggled");
        Ok(mode)
    }
}
