//! sequencer-launcher: run the bundled Java runtime against `sequencer.jar`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::ffi::OsStr;

use adapters::{ProcessWorkingDirectory, SystemShell};
use app::LaunchContext;

pub use app::commands::launch::LaunchReport;
pub use domain::{AppError, LaunchCommand, LaunchProfile};
pub use ports::ShellOutcome;

/// Launch the bundled runtime from the current directory, printing to stdout.
pub fn launch() -> Result<LaunchReport, AppError> {
    let ctx = LaunchContext::new(ProcessWorkingDirectory::new(), SystemShell::new());
    app::commands::launch::execute(&ctx, &mut std::io::stdout())
}

/// The command line a launch from `working_dir` would run, without running it.
pub fn command_for(working_dir: impl AsRef<OsStr>) -> LaunchCommand {
    LaunchCommand::new(working_dir.as_ref(), &LaunchProfile::bundled())
}
