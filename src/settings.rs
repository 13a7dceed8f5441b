//! User settings: zoom behavior, handle tolerance, paper size, export DPI.
//!
//! Stored as JSON at `<config_dir>/cheatsheet-maker/settings.json`. Every
//! field has a default, so partial files are fine and a missing or broken
//! file falls back to defaults.

use crate::constants::{
    APP_DIR_NAME, DEFAULT_EXPORT_DPI, DEFAULT_ZOOM, HANDLE_TOLERANCE, MIN_ZOOM, ZOOM_STEP,
};
use crate::error::Result;
use crate::types::PaperSize;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SETTINGS_FILE_NAME: &str = "settings.json";

/// Zoom behavior of the editor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Zoom applied on start and on reset
    pub default: f64,
    /// Floor for zooming out
    pub min: f64,
    /// Multiplicative step per zoom action
    pub step: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            default: DEFAULT_ZOOM,
            min: MIN_ZOOM,
            step: ZOOM_STEP,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub zoom: ZoomSettings,
    /// Handle hit tolerance in page points
    pub handle_tolerance: f64,
    /// Paper format for new documents
    pub paper: PaperSize,
    /// Resolution for raster page export
    pub export_dpi: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zoom: ZoomSettings::default(),
            handle_tolerance: HANDLE_TOLERANCE,
            paper: PaperSize::default(),
            export_dpi: DEFAULT_EXPORT_DPI,
        }
    }
}

/// `<config_dir>/cheatsheet-maker/settings.json`, if a config dir exists.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`. A missing file is silent; a broken one is logged.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read settings");
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        let path = default_settings_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory")
        })?;
        self.save_to(&path)
    }

    /// Write pretty JSON atomically, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(path)?;

        info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Replace non-positive or non-finite numbers with their defaults.
    fn sanitized(mut self) -> Self {
        let defaults = Settings::default();
        let valid = |v: f64| v.is_finite() && v > 0.0;

        if !valid(self.zoom.min) {
            self.zoom.min = defaults.zoom.min;
        }
        if !valid(self.zoom.default) {
            self.zoom.default = defaults.zoom.default;
        }
        self.zoom.default = self.zoom.default.max(self.zoom.min);
        if !valid(self.zoom.step) || self.zoom.step <= 1.0 {
            self.zoom.step = defaults.zoom.step;
        }
        if !valid(self.handle_tolerance) {
            self.handle_tolerance = defaults.handle_tolerance;
        }
        if let PaperSize::Custom { width, height } = self.paper {
            if !valid(width) || !valid(height) {
                self.paper = defaults.paper;
            }
        }
        if self.export_dpi == 0 {
            self.export_dpi = defaults.export_dpi;
        }
        self
    }
}
