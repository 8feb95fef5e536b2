use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SETTINGS_DIR: &str = ".zport";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Candidates offered by the baud-rate dropdown, highest first.
    #[serde(default = "default_baud_rates")]
    pub baud_rates: Vec<u32>,
    #[serde(default = "default_baud")]
    pub default_baud: u32,
    /// Prefix received chunks with milliseconds since connect.
    #[serde(default)]
    pub show_timestamps: bool,
    /// Input poll interval; every tick also repaints.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_baud_rates() -> Vec<u32> {
    vec![
        115_200, 57_600, 38_400, 19_200, 9_600, 4_800, 2_400, 1_800, 1_200, 600, 300, 200, 150,
        134, 110, 75, 50,
    ]
}

fn default_baud() -> u32 {
    9_600
}

fn default_tick_ms() -> u64 {
    16
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            baud_rates: default_baud_rates(),
            default_baud: default_baud(),
            show_timestamps: false,
            tick_ms: default_tick_ms(),
        }
    }
}

fn get_home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

pub fn get_settings_path() -> Option<PathBuf> {
    get_home_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_home_dir().map(|dir| dir.join(SETTINGS_DIR).join("logs"))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "cannot determine log directory")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Create the settings file with defaults if it does not exist yet.
pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "cannot determine settings directory",
        )
    })?;
    ensure_settings_file_at(&path)?;
    Ok(path)
}

pub(crate) fn ensure_settings_file_at(path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&Settings::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    load_settings_from(&path)
}

pub(crate) fn load_settings_from(path: &std::path::Path) -> Option<Settings> {
    let data = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

#[cfg(test)]
#[path = "../../tests/unit/services/settings.rs"]
mod tests;
