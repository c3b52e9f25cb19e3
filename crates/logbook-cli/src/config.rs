use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the logbook database inside the data directory.
pub const LOGBOOK_FILE_NAME: &str = "logbook.db";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogbookConfig {
    pub logbook: LogbookSection,
    pub ui: UiSection,
    pub log: LogSection,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogbookSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiSection {
    pub color: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogSection {
    pub level: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_logbook_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(LOGBOOK_FILE_NAME))
}

pub fn read_config(path: &Path) -> anyhow::Result<LogbookConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config file if it exists, falling back to defaults otherwise.
pub fn load_config(path: &Path) -> anyhow::Result<LogbookConfig> {
    if !path.exists() {
        return Ok(LogbookConfig::default());
    }
    read_config(path)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("logbook"));
        }
    }
    Ok(home_dir()?.join(".config").join("logbook"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("logbook"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("logbook"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
