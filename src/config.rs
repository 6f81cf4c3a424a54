use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Persisted board settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSettings {
    /// Base URL of the kiosk backend.
    pub server_url: String,
    /// Poll period in milliseconds.
    pub poll_interval_ms: u64,
    /// Alert sound file; no sound is loaded when unset.
    pub sound_path: Option<PathBuf>,
    /// Directory for rolling log files.
    pub log_dir: Option<PathBuf>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            poll_interval_ms: 2500,
            sound_path: None,
            log_dir: None,
        }
    }
}

impl BoardSettings {
    /// Load settings from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_file().unwrap_or_default()
    }

    fn load_from_file() -> Result<Self> {
        let path = Self::settings_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to disk.
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    fn settings_path() -> Result<PathBuf> {
        if let Some(proj_dirs) = ProjectDirs::from("com", "tablero", "tablero") {
            Ok(proj_dirs.config_dir().join("settings.json"))
        } else {
            Ok(PathBuf::from(".tablero-settings.json"))
        }
    }
}
