//! Toolkit settings, loadable from JSON.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

pub use crate::ui::core::color::parse_color;
use crate::ui::widgets::base::WidgetColors;

const SETTINGS_DIR: &str = ".gridgui";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    pub sensitivity: f32,
    /// printf-style template, see `ValueFormat`.
    pub format: String,
    pub max_text_len: usize,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            sensitivity: 1.0,
            format: "%.2f".to_string(),
            max_text_len: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub default_padding: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiSettings {
    /// Half-period of the text caret blink, in seconds.
    pub caret_blink_delay: f32,
    pub colors: WidgetColors,
    pub slider: SliderSettings,
    pub layout: LayoutSettings,
    /// Pixels per cell assumed for drag scaling and pointer warps.
    pub cell_pixels: i32,
    pub default_radio_group: u32,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            caret_blink_delay: 0.5,
            colors: WidgetColors::default(),
            slider: SliderSettings::default(),
            layout: LayoutSettings::default(),
            cell_pixels: 8,
            default_radio_group: 0,
        }
    }
}

/// `Ok(None)` when the file does not exist.
pub fn load_settings(path: &Path) -> io::Result<Option<GuiSettings>> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

pub fn save_settings(path: &Path, settings: &GuiSettings) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(path, content)
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return Some(PathBuf::from(appdata));
        }
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    std::env::var("HOME").ok().map(PathBuf::from)
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
