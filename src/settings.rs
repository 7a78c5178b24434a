use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::player::DEFAULT_PLAYER_NAME;

pub const SETTINGS_FILE: &str = "settings.json";

// Define a structure to hold application settings with serialization and deserialization capabilities.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub player_name: String,
    pub debug_mode: bool,  // Shows the message history line in game.
    pub seed: Option<u64>, // Fixed RNG seed; None seeds from the OS.
    pub tick_rate: f64,
    pub frame_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            debug_mode: false,
            seed: None,
            tick_rate: 4.0,
            frame_rate: 30.0,
        }
    }
}

// ~/strain_collector/data, where settings and the log file live.
pub fn data_dir() -> Result<PathBuf> {
    let home_dir = dir::home_dir().ok_or(AppError::NoHomeDir)?;
    let path = home_dir.join("strain_collector").join("data");
    fs::create_dir_all(&path)?;
    Ok(path)
}

impl Settings {
    // Load settings, falling back to (and writing back) the defaults when the
    // file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_settings_from_file(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings, {}: {e}", path.display());
                let settings = Self::default();
                if let Err(e) = settings.save_to_file(path) {
                    log::error!("Failed to write default settings: {e}");
                }
                settings
            }
        }
    }

    pub fn load_settings_from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&data)?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }
}
