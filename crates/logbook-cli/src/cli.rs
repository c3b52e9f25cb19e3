use clap::{ArgAction, Parser};

use logbook_core::VERSION;

/// Logbook - A personal, CLI-first logbook of timestamped entries
#[derive(Parser, Debug)]
#[command(name = "logbook")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Path to the logbook database file
    #[arg(short, long, env = "LOGBOOK_PATH")]
    pub logbook: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from(["logbook", "--logbook", "/tmp/x.db", "--no-color", "-vv"])
            .unwrap();
        assert_eq!(cli.logbook.as_deref(), Some("/tmp/x.db"));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["logbook", "add"]).is_err());
    }
}
