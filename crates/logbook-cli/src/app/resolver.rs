//! Path resolution for config and logbook files.

use std::path::{Path, PathBuf};

use crate::config::{default_config_path, default_logbook_path, LogbookConfig};

/// Resolve the config file path, checking LOGBOOK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("LOGBOOK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the logbook file path.
///
/// Order: `--logbook` / `LOGBOOK_PATH`, then `[logbook] path` from the config
/// file, then the per-user data directory.
pub fn resolve_logbook_path(
    flag: Option<&str>,
    config: &LogbookConfig,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config
        .logbook
        .path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        return Ok(PathBuf::from(path));
    }
    default_logbook_path()
}

/// Create the directory that will hold the logbook file, if it is missing.
pub fn prepare_logbook_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
