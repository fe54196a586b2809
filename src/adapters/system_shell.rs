use std::ffi::OsStr;
use std::io;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{CommandShell, ShellOutcome};

/// The host's default command interpreter: `/bin/sh -c` on Unix, `%COMSPEC% /C` on Windows.
#[derive(Debug, Clone)]
pub struct SystemShell {
    program: String,
}

impl SystemShell {
    pub fn new() -> Self {
        Self { program: default_program() }
    }

    #[cfg(not(windows))]
    fn command(&self, line: &OsStr) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-c").arg(line);
        cmd
    }

    #[cfg(windows)]
    fn command(&self, line: &OsStr) -> Command {
        use std::os::windows::process::CommandExt;

        // cmd.exe does its own parsing; quoting the line as one argv entry would change it.
        let mut cmd = Command::new(&self.program);
        cmd.arg("/C").raw_arg(line);
        cmd
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(windows))]
fn default_program() -> String {
    "/bin/sh".to_string()
}

#[cfg(windows)]
fn default_program() -> String {
    std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
}

/// Run `cmd` to completion with console interrupts ignored in this process.
#[cfg(unix)]
fn wait_uninterrupted(mut cmd: Command) -> io::Result<ExitStatus> {
    use super::interrupt_guard::InterruptGuard;

    let guard = match InterruptGuard::ignore() {
        Ok(guard) => Some(guard),
        Err(err) => {
            debug!(error = %err, "could not ignore console interrupts");
            None
        }
    };
    if let Some(guard) = &guard {
        guard.restore_in_child(&mut cmd);
    }
    cmd.status()
}

/// Run `cmd` to completion; the console delivers Ctrl+C to the child as well.
#[cfg(not(unix))]
fn wait_uninterrupted(mut cmd: Command) -> io::Result<ExitStatus> {
    cmd.status()
}

impl CommandShell for SystemShell {
    fn name(&self) -> &str {
        &self.program
    }

    fn execute(&self, command: &OsStr) -> Result<ShellOutcome, AppError> {
        debug!(shell = %self.program, command = ?command, "spawning command interpreter");

        let status = wait_uninterrupted(self.command(command)).map_err(|e| {
            AppError::ShellSpawn { shell: self.program.clone(), details: e.to_string() }
        })?;

        Ok(ShellOutcome { exit_code: status.code() })
    }
}
