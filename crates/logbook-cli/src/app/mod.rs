//! Application-level utilities for the Logbook CLI.
//!
//! This module provides path resolution for the config and logbook files
//! and creation of the data directory.

mod resolver;

// Re-export public API
pub use resolver::{prepare_logbook_dir, resolve_config_path, resolve_logbook_path};
