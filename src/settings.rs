//! Persisted user settings (theme and reduced motion).
//!
//! Stored as TOML in the platform config directory. Absence or a parse
//! failure falls back to defaults with a warning; losing a preference is
//! never worth failing startup over.

use crate::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub reduced_motion: bool,
}

impl Settings {
    /// Loads settings from the platform config directory.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            warn!("No config directory on this platform, using default settings");
            return Self::default();
        };
        Self::load_from(&path)
    }

    fn load_from(path: &PathBuf) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Unparsable settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Writes settings to the platform config directory.
    pub fn save(&self) -> Result<()> {
        let path = settings_path().ok_or_else(|| {
            crate::error::AppError::Settings("no config directory on this platform".to_string())
        })?;
        self.save_to(&path)
    }

    fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| crate::error::AppError::Settings(e.to_string()))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| crate::error::AppError::Settings(e.to_string()))?;
        Ok(())
    }
}

fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slint-portfolio").join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let settings = Settings {
            theme: Theme::Dark,
            reduced_motion: true,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "theme = 42\nnot even toml [").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn theme_toggles() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert!(Theme::Dark.is_dark());
    }
}
