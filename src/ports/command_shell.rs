use std::ffi::OsStr;

use crate::domain::AppError;

/// Result of handing a command line to the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellOutcome {
    /// Interpreter exit code, `None` when terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ShellOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

pub trait CommandShell {
    /// Human-readable name of the interpreter, used in diagnostics.
    fn name(&self) -> &str;

    /// Run `command` through the interpreter and block until it exits.
    ///
    /// Standard streams are inherited; nothing is captured. An interrupt from
    /// the console reaches the interpreter but not the caller.
    fn execute(&self, command: &OsStr) -> Result<ShellOutcome, AppError>;
}
