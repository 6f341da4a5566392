//! Startup settings
//!
//! Asset locations, window options and tuning. Every field has a default, so
//! an optional `pong.json` only needs the keys it overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the sprite images
    pub texture_dir: PathBuf,
    /// Directory holding the score font
    pub font_dir: PathBuf,

    // === Window ===
    pub window_title: String,
    /// Windowed size; fullscreen uses the desktop resolution instead
    pub window_width: u32,
    pub window_height: u32,
    /// Borderless fullscreen at desktop resolution
    pub fullscreen: bool,

    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            texture_dir: PathBuf::from("./textures/"),
            font_dir: PathBuf::from("./fonts/"),
            window_title: consts::GAME_NAME.to_string(),
            window_width: 800,
            window_height: 600,
            fullscreen: true,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Default config file, looked up in the working directory
    pub const FILE_NAME: &'static str = "pong.json";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load overrides from `path`, falling back to defaults when the file is
    /// absent or invalid
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(err) => {
                log::warn!("Could not read {}: {err}", path.display());
                Self::default()
            }
        }
    }

    pub fn texture_path(&self, file: &str) -> PathBuf {
        self.texture_dir.join(file)
    }

    pub fn font_path(&self, file: &str) -> PathBuf {
        self.font_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window_title, "PONG");
        assert!(settings.fullscreen);
        assert_eq!(
            settings.texture_path(consts::TABLE_TEXTURE),
            PathBuf::from("./textures/table.png")
        );
        assert_eq!(
            settings.font_path(consts::SCORE_FONT),
            PathBuf::from("./fonts/lazy.ttf")
        );
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "fullscreen": false,
            "window_width": 1024,
            "tuning": { "ball_speed_coeff": 0.01 }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert!(!settings.fullscreen);
        assert_eq!(settings.window_width, 1024);
        assert_eq!(settings.window_height, 600);
        assert_eq!(settings.tuning.ball_speed_coeff, 0.01);
        assert_eq!(settings.tuning.table_coeff, 0.9);
        assert_eq!(settings.texture_dir, PathBuf::from("./textures/"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load(Path::new("definitely/not/here/pong.json"));
        assert_eq!(settings, Settings::default());
    }
}
