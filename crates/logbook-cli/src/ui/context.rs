//! UI context for environment detection and configuration.

use std::io::IsTerminal;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
}

impl UiContext {
    /// Create context from environment, CLI flag and config.
    ///
    /// Color is disabled when stdout is not a TTY, `NO_COLOR` is set,
    /// `TERM=dumb`, `--no-color` was passed, or the config says so.
    pub fn from_env(no_color_flag: bool, config_color: Option<bool>) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var_os("NO_COLOR").is_some();

        Self {
            color: resolve_color(
                is_tty,
                no_color_flag || no_color_env || term_is_dumb,
                config_color,
            ),
        }
    }

    /// Context with all styling disabled.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self { color: false }
    }
}

fn resolve_color(is_tty: bool, suppressed: bool, config_color: Option<bool>) -> bool {
    is_tty && !suppressed && config_color.unwrap_or(true)
}
