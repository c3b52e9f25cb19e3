//! Interactive session loop.
//!
//! The session renders the main menu, dispatches the chosen action to the
//! store, and pages through entries one at a time. Store failures are
//! reported to the user and the loop carries on; only terminal I/O errors
//! end the session early.

mod action;
mod terminal;

use logbook_core::storage::{Entry, EntryFilter, StorageEngine};
use logbook_core::LogbookError;
use tracing::{debug, info, warn};

use crate::ui::{self, Badge, UiContext};

pub use action::{EntryAction, KeyedAction, MenuAction};
#[cfg(test)]
pub use terminal::ScriptedTerminal;
pub use terminal::{IoTerminal, Terminal};

const ACTION_PROMPT: &str = "Action: ";
const SEARCH_PROMPT: &str = "Search query: ";
const SAVE_PROMPT: &str = "Save entry? [y/n] ";
const DELETE_PROMPT: &str = "Are you sure you want to delete this? [y/n] ";
const ADD_INSTRUCTIONS: &str = "Enter your entry. Press [ctrl + d] when finished.";

/// Whether the main loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive session over a store and a terminal.
pub struct Session<'a, S, T> {
    store: &'a mut S,
    term: &'a mut T,
    ui: UiContext,
}

impl<'a, S: StorageEngine, T: Terminal> Session<'a, S, T> {
    pub fn new(store: &'a mut S, term: &'a mut T, ui: UiContext) -> Self {
        Self { store, term, ui }
    }

    /// Run the main menu until the user quits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        info!("session started");
        loop {
            self.render_menu()?;
            let Some(input) = self.term.read_line(ACTION_PROMPT)? else {
                debug!("end of input at main menu");
                break;
            };
            self.term.print_line("")?;

            let Some(action) = MenuAction::from_key(&input) else {
                debug!(input = input.as_str(), "unrecognized menu choice");
                continue;
            };
            if self.dispatch(action)? == Flow::Quit {
                break;
            }
        }
        info!("session ended");
        Ok(())
    }

    fn dispatch(&mut self, action: MenuAction) -> anyhow::Result<Flow> {
        match action {
            MenuAction::Add => self.add_entry()?,
            MenuAction::View => self.view_entries(None)?,
            MenuAction::Search => self.search_entries()?,
            MenuAction::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn render_menu(&mut self) -> anyhow::Result<()> {
        let title = ui::title(&self.ui, "Logbook");
        self.term.print_line(&title)?;
        self.render_choices::<MenuAction>()
    }

    fn render_choices<A: KeyedAction>(&mut self) -> anyhow::Result<()> {
        for action in A::ALL {
            let line = ui::choice(&self.ui, action.key(), action.label());
            self.term.print_line(&line)?;
        }
        Ok(())
    }

    /// Ask a yes/no question; only `y` counts as yes.
    fn confirm(&mut self, prompt: &str) -> anyhow::Result<bool> {
        let answer = self.term.read_line(prompt)?;
        Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")))
    }

    fn add_entry(&mut self) -> anyhow::Result<()> {
        let instructions = ui::framed(&self.ui, ADD_INSTRUCTIONS);
        self.term.print_line(&instructions)?;

        let data = self.term.read_to_end()?;
        let content = data.trim();
        if content.is_empty() {
            debug!("blank entry discarded");
            return Ok(());
        }

        if !self.confirm(SAVE_PROMPT)? {
            debug!("entry discarded by user");
            return Ok(());
        }

        match self.store.create(content) {
            Ok(entry) => {
                info!(id = entry.id, "entry saved");
                let line = ui::badge(&self.ui, Badge::Ok, "Saved successfully!");
                self.term.print_line(&line)?;
            }
            Err(err) => self.report(&err, "Entry could not be saved.")?,
        }
        self.term.print_line("")?;
        Ok(())
    }

    fn search_entries(&mut self) -> anyhow::Result<()> {
        let Some(query) = self.term.read_line(SEARCH_PROMPT)? else {
            return Ok(());
        };
        self.view_entries(Some(&query))
    }

    /// Page through a snapshot of matching entries.
    ///
    /// The result set is fetched once; deletions do not refresh it.
    fn view_entries(&mut self, query: Option<&str>) -> anyhow::Result<()> {
        let filter = EntryFilter::from_query(query);
        let entries = match self.store.list(&filter) {
            Ok(entries) => entries,
            Err(err) => return self.report(&err, "Entries could not be loaded."),
        };

        if entries.is_empty() {
            self.term.print_line("No entries found.")?;
            self.term.print_line("")?;
            return Ok(());
        }

        for entry in &entries {
            self.render_entry(entry)?;
            self.render_choices::<EntryAction>()?;

            let Some(input) = self.term.read_line(ACTION_PROMPT)? else {
                return Ok(());
            };
            match EntryAction::from_key(&input) {
                Some(EntryAction::Quit) => return Ok(()),
                Some(EntryAction::Delete) => self.delete_entry(entry)?,
                Some(EntryAction::Next) | None => {}
            }
            self.term.print_line("")?;
        }
        Ok(())
    }

    fn render_entry(&mut self, entry: &Entry) -> anyhow::Result<()> {
        let stamp = ui::format_local_timestamp(&entry.timestamp);
        let heading = ui::heading(&self.ui, &stamp);
        self.term.print_line(&heading)?;
        self.term.print_line(&entry.content)?;
        self.term.print_line("")?;
        Ok(())
    }

    fn delete_entry(&mut self, entry: &Entry) -> anyhow::Result<()> {
        if !self.confirm(DELETE_PROMPT)? {
            return Ok(());
        }

        match self.store.delete(entry.id) {
            Ok(()) => {
                info!(id = entry.id, "entry deleted");
                let line = ui::badge(&self.ui, Badge::Ok, "Entry deleted.");
                self.term.print_line(&line)?;
            }
            Err(err) if err.is_not_found() => {
                warn!(id = entry.id, "entry already gone");
                let line = ui::badge(&self.ui, Badge::Warn, "Entry no longer exists.");
                self.term.print_line(&line)?;
            }
            Err(err) => self.report(&err, "Entry could not be deleted.")?,
        }
        Ok(())
    }

    /// Show a short failure message; details go to the log only.
    fn report(&mut self, err: &LogbookError, message: &str) -> anyhow::Result<()> {
        warn!(error = %err, "{}", message);
        let line = ui::error_message(&self.ui, message, None);
        self.term.print_line(&line)?;
        Ok(())
    }
}
