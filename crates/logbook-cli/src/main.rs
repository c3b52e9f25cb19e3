//! Logbook CLI - A personal, CLI-first logbook of timestamped entries
//!
//! Opens the logbook file once, then hands it to the interactive session.

mod app;
mod cli;
mod config;
mod constants;
mod errors;
mod logging;
mod session;
mod ui;

use clap::Parser;
use tracing::{error, info};

use logbook_core::storage::{SqliteStorage, StorageEngine};
use logbook_core::LogbookError;

use crate::app::{prepare_logbook_dir, resolve_config_path, resolve_logbook_path};
use crate::cli::Cli;
use crate::config::{load_config, LogbookConfig};
use crate::errors::CliError;
use crate::session::{IoTerminal, Session};
use crate::ui::UiContext;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match resolve_config_path() {
        Ok(path) => load_config(&path)
            .unwrap_or_else(|e| CliError::invalid_input(e.to_string()).exit()),
        Err(_) => LogbookConfig::default(),
    };

    if let Err(e) = logging::init_logging(cli.verbose, config.log.level.as_deref()) {
        CliError::invalid_input(e.to_string()).exit();
    }

    let path = resolve_logbook_path(cli.logbook.as_deref(), &config)
        .unwrap_or_else(|e| CliError::invalid_input(e.to_string()).exit());
    let display_path = path.display().to_string();

    if let Err(e) = prepare_logbook_dir(&path) {
        let err = LogbookError::StorageUnavailable(e.to_string());
        error!(path = %display_path, error = %err, "cannot create logbook directory");
        CliError::storage_unavailable(&display_path, &err).exit();
    }

    let mut storage = SqliteStorage::initialize(&path).unwrap_or_else(|err| {
        error!(path = %display_path, error = %err, "cannot open logbook");
        CliError::storage_unavailable(&display_path, &err).exit()
    });
    info!(path = %display_path, entries = storage.count()?, "logbook ready");

    let ui = UiContext::from_env(cli.no_color, config.ui.color);
    let mut terminal = IoTerminal::stdio();
    Session::new(&mut storage, &mut terminal, ui).run()
}
