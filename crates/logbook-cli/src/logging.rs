//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV: &str = "LOGBOOK_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive from `-v` count, falling back to config.
pub fn level_directive(verbose: u8, config_level: Option<&str>) -> String {
    match verbose {
        0 => config_level
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(DEFAULT_LEVEL)
            .to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `LOGBOOK_LOG` overrides everything else.
pub fn init_logging(verbose: u8, config_level: Option<&str>) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level_directive(verbose, config_level))
            .map_err(|e| anyhow::anyhow!("Invalid log level: {}", e))?,
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_warn() {
        assert_eq!(level_directive(0, None), "warn");
    }

    #[test]
    fn test_config_level_used_without_flags() {
        assert_eq!(level_directive(0, Some("debug")), "debug");
        assert_eq!(level_directive(0, Some("  ")), "warn");
    }

    #[test]
    fn test_verbose_flag_overrides_config() {
        assert_eq!(level_directive(1, Some("error")), "info");
        assert_eq!(level_directive(2, None), "debug");
        assert_eq!(level_directive(5, None), "trace");
    }
}
