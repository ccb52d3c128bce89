//! Presentation preferences
//!
//! Stored as JSON next to the binary's working directory. Session choices
//! (mode, difficulty, win condition) are never persisted; they come from the
//! menus every run.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("settings file {}: JSON error: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Frontend preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ring the terminal bell on hits and points
    pub sound: bool,
    /// Frames drawn per second
    pub target_fps: u32,
    /// Show FPS counter
    pub show_fps: bool,
    /// How long a key press counts as held (terminals only report presses)
    pub key_hold_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            target_fps: 60,
            show_fps: false,
            key_hold_ms: 120,
        }
    }
}

impl Settings {
    /// Environment variable overriding the settings path
    pub const PATH_ENV: &'static str = "DUEL_PONG_SETTINGS";
    const DEFAULT_FILE: &'static str = "duel_pong_settings.json";

    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE))
    }

    /// Load settings, falling back to defaults if the file is missing or bad
    pub fn load() -> Self {
        let path = Self::path();
        match Self::load_from(&path) {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Read settings from `path`; `Ok(None)` if the file does not exist
    pub fn load_from(path: &Path) -> Result<Option<Self>, SettingsError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let settings: Self = serde_json::from_str(&json).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(settings.sanitized()))
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&Self::path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Clamp values into ranges the frontend can use
    fn sanitized(mut self) -> Self {
        self.target_fps = self.target_fps.clamp(10, 240);
        self.key_hold_ms = self.key_hold_ms.clamp(20, 1000);
        self
    }

    pub fn frame_secs(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    pub fn key_hold_secs(&self) -> f32 {
        self.key_hold_ms as f32 / 1000.0
    }
}
