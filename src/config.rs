//! Configuration handling for the form info dialog

use crate::host::DEFAULT_ADDRESS;
use crate::plugin::PLUGIN_NAME;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default info dialog size in cells
pub const DEFAULT_DIALOG_WIDTH: u16 = 60;
pub const DEFAULT_DIALOG_HEIGHT: u16 = 20;

/// Smallest dialog that still shows a label, a value and the hints
const MIN_DIALOG_WIDTH: u16 = 20;
const MIN_DIALOG_HEIGHT: u16 = 5;

/// User configuration, every field optional
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormInfoConfig {
    /// Plugin host address
    pub host_address: Option<String>,
    /// Name under which the host registered the form info plugin
    pub plugin_name: Option<String>,
    /// Info dialog width in cells
    pub dialog_width: Option<u16>,
    /// Info dialog height in cells
    pub dialog_height: Option<u16>,
}

impl FormInfoConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "forminfo", "forminfo-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: FormInfoConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Host address; an explicit override wins over the file
    pub fn host_address(&self, override_address: Option<&str>) -> String {
        override_address
            .or(self.host_address.as_deref())
            .unwrap_or(DEFAULT_ADDRESS)
            .to_string()
    }

    pub fn plugin_name(&self, override_name: Option<&str>) -> String {
        override_name
            .or(self.plugin_name.as_deref())
            .unwrap_or(PLUGIN_NAME)
            .to_string()
    }

    /// Info dialog size as (width, height)
    pub fn dialog_size(&self) -> (u16, u16) {
        (
            self.dialog_width
                .unwrap_or(DEFAULT_DIALOG_WIDTH)
                .max(MIN_DIALOG_WIDTH),
            self.dialog_height
                .unwrap_or(DEFAULT_DIALOG_HEIGHT)
                .max(MIN_DIALOG_HEIGHT),
        )
    }
}
