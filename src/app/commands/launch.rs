//! Launch the bundled runtime against the sequencer jar.

use std::ffi::OsString;
use std::io::Write;

use tracing::debug;

use crate::app::LaunchContext;
use crate::domain::{AppError, LaunchCommand};
use crate::ports::{CommandShell, ShellOutcome, WorkingDirectory};

pub const BANNER: &str = "Launching Sequencer";
pub const COMMAND_LABEL: &str = "Running command: ";

/// What was run and how the interpreter finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub command: LaunchCommand,
    pub outcome: ShellOutcome,
}

/// Build the command line, announce it on `console`, and run it through the shell.
///
/// An unresolvable working directory and console write failures do not stop
/// the launch. The only error returned is a shell that could not be started.
pub fn execute<W, S, O>(
    ctx: &LaunchContext<W, S>,
    console: &mut O,
) -> Result<LaunchReport, AppError>
where
    W: WorkingDirectory,
    S: CommandShell,
    O: Write,
{
    let working_dir = ctx.working_directory().current().unwrap_or_else(|err| {
        debug!(error = %err, "continuing with empty working directory");
        OsString::new()
    });

    let command = LaunchCommand::new(&working_dir, ctx.profile());
    if command.needs_quoting() {
        debug!(
            working_dir = ?command.working_dir(),
            "working directory contains characters the shell may split or expand"
        );
    }

    if let Err(err) = announce(console, &command) {
        debug!(error = %err, "console output failed");
    }

    let outcome = ctx.shell().execute(command.as_os_str())?;
    debug!(shell = ctx.shell().name(), exit_code = ?outcome.exit_code, "command interpreter exited");

    Ok(LaunchReport { command, outcome })
}

fn announce<O: Write>(console: &mut O, command: &LaunchCommand) -> Result<(), AppError> {
    writeln!(console, "{BANNER}").map_err(AppError::Console)?;
    writeln!(console, "{COMMAND_LABEL}{command}").map_err(AppError::Console)?;
    // The child writes straight to the inherited stream, so ours must land first.
    console.flush().map_err(AppError::Console)
}
