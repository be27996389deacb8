//! Game settings and preferences
//!
//! Stored as a small JSON file next to the game. A missing or unreadable file
//! is never fatal: the defaults are used and the problem is logged.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BRICK_COLUMNS, BRICK_ROWS, FIELD_WIDTH};
use crate::sim::max_columns;

/// Settings file problems
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings file error: {e}"),
            SettingsError::Parse(e) => write!(f, "settings parse error: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Start with sound off
    pub muted: bool,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Brick wall ===
    /// Requested columns (clamped to what fits the field)
    pub brick_columns: u32,
    pub brick_rows: u32,

    // === Demo ===
    /// Seed for the computer player
    pub autopilot_seed: u64,
    /// Frames to run before exiting
    pub demo_frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            sfx_volume: 1.0,
            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            autopilot_seed: 0x5eed,
            demo_frames: 60 * 60,
        }
    }
}

impl Settings {
    /// Column count that actually fits the field
    pub fn grid_columns(&self) -> u32 {
        self.brick_columns.clamp(1, max_columns(FIELD_WIDTH))
    }

    /// Effective volume (0.0 - 1.0)
    pub fn effective_volume(&self) -> f32 {
        if self.sfx_volume.is_finite() {
            self.sfx_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path)
            .map_err(SettingsError::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({e})");
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.brick_columns, 10);
        assert_eq!(s.grid_columns(), 9);
        assert_eq!(s.brick_rows, 5);
        assert!(!s.muted);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{ "muted": true, "brick_rows": 3 }"#).unwrap();
        assert!(s.muted);
        assert_eq!(s.brick_rows, 3);
        assert_eq!(s.sfx_volume, 1.0);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_volume_clamped() {
        let s = Settings {
            sfx_volume: 3.0,
            ..Default::default()
        };
        assert_eq!(s.effective_volume(), 1.0);
        let s = Settings {
            sfx_volume: f32::NAN,
            ..Default::default()
        };
        assert_eq!(s.effective_volume(), 0.0);
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("famicom-breakout-{}.json", std::process::id()));
        let s = Settings {
            brick_columns: 4,
            muted: true,
            ..Default::default()
        };
        s.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), s);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load_from(Path::new("/nonexistent/famicom-breakout.json"));
        assert_eq!(s, Settings::default());
    }
}
