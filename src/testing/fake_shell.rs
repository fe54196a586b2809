use std::ffi::OsStr;

use crate::domain::AppError;
use crate::ports::{CommandShell, ShellOutcome};
use crate::testing::Journal;

/// Shell that records command lines instead of running them.
pub struct RecordingShell {
    journal: Journal,
    exit_code: Option<i32>,
    fail_spawn: bool,
}

impl RecordingShell {
    pub fn new(journal: &Journal) -> Self {
        Self { journal: journal.clone(), exit_code: Some(0), fail_spawn: false }
    }

    pub fn exiting_with(mut self, exit_code: Option<i32>) -> Self {
        self.exit_code = exit_code;
        self
    }

    pub fn unable_to_spawn(mut self) -> Self {
        self.fail_spawn = true;
        self
    }
}

impl CommandShell for RecordingShell {
    fn name(&self) -> &str {
        "recording-shell"
    }

    fn execute(&self, command: &OsStr) -> Result<ShellOutcome, AppError> {
        self.journal.record_exec(command);
        if self.fail_spawn {
            return Err(AppError::ShellSpawn {
                shell: self.name().to_string(),
                details: "spawn refused".into(),
            });
        }
        Ok(ShellOutcome { exit_code: self.exit_code })
    }
}
