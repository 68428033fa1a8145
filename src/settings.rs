//! Persisted recorder preferences.
//!
//! The recorder stores its settings as JSON under `$HOME`; the editor only
//! reads the recording fps once at startup to label and cap the max-fps
//! button.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The editor never offers more than 30 fps regardless of the recording fps.
pub const MAX_EXPORT_FPS: u32 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self { fps: MAX_EXPORT_FPS }
    }
}

impl Settings {
    /// The upper fps choice shown in the editor: the recording fps, capped.
    pub fn max_export_fps(&self) -> u32 {
        self.fps.min(MAX_EXPORT_FPS)
    }
}

fn settings_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".cutaway").join("settings.json"))
}

/// Load settings, falling back to defaults when the file is missing or
/// unreadable.
pub fn load() -> Settings {
    let Some(path) = settings_path() else {
        log::warn!("HOME not set, using default settings");
        return Settings::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Malformed settings at {}: {e}", path.display());
                Settings::default()
            }
        },
        Err(_) => {
            log::debug!("No settings file at {}, using defaults", path.display());
            Settings::default()
        }
    }
}
