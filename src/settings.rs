//! User settings persisted as JSON in the platform config directory.
//!
//! - Linux: `~/.config/labelboard/settings.json`
//! - macOS: `~/Library/Application Support/labelboard/settings.json`
//! - Windows: `%APPDATA%\labelboard\settings.json`

use crate::constants::{DEFAULT_ITEM_HEIGHT, DEFAULT_ITEM_WIDTH};
use crate::error::{LabelError, LabelResult};
use crate::printer::PrintOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Size given to newly dropped items
    pub item_size: (f32, f32),
    /// Pixel size barcodes are generated at
    pub barcode_size: (u32, u32),
    /// Options used by the Print action
    pub print_options: PrintOptions,
    pub theme: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            item_size: (DEFAULT_ITEM_WIDTH, DEFAULT_ITEM_HEIGHT),
            barcode_size: (DEFAULT_ITEM_WIDTH as u32, DEFAULT_ITEM_HEIGHT as u32),
            print_options: PrintOptions::default(),
            theme: ThemeMode::default(),
        }
    }
}

/// Location of the settings file, if the platform has a config directory
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("labelboard").join("settings.json"))
}

impl Settings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("no config directory; using default settings");
                Self::default()
            }
        }
    }

    /// Load from `path`. A missing file yields defaults silently; an
    /// unreadable or corrupt one yields defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                tracing::warn!("failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> LabelResult<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self) -> LabelResult<()> {
        let path = settings_path()
            .ok_or_else(|| LabelError::Other("no config directory".to_string()))?;
        self.save_to(&path)
    }

    /// Write pretty JSON to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> LabelResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::debug!("settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp values a hand-edited file could get wrong.
    fn sanitized(mut self) -> Self {
        let min = crate::constants::MIN_ITEM_SIZE;
        self.item_size = (self.item_size.0.max(min), self.item_size.1.max(min));
        self.barcode_size = (self.barcode_size.0.max(1), self.barcode_size.1.max(1));
        self.print_options.copies = self.print_options.copies.max(1);
        self
    }
}
