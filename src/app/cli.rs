//! CLI Adapter.

use std::ffi::OsString;

use clap::Parser;
use tracing::debug;

use crate::app::logging;

#[derive(Parser, Debug, Default)]
#[command(name = "sequencer-launcher")]
#[command(
    about = "Run sequencer.jar with the Java runtime bundled under ./jre",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Accepted for compatibility with shortcuts and file associations; never read.
    #[arg(
        hide = true,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    ignored: Vec<OsString>,
}

/// Entry point for the CLI.
///
/// Always returns normally so the process exits with status 0, whatever
/// happened to the runtime or the shell.
pub fn run() {
    logging::init();

    let cli = Cli::try_parse().unwrap_or_default();
    if !cli.ignored.is_empty() {
        debug!(count = cli.ignored.len(), "ignoring command-line arguments");
    }

    if let Err(err) = crate::launch() {
        debug!(error = %err, "launch failed");
    }
}
