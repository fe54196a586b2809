use std::ffi::OsString;

use crate::domain::AppError;
use crate::ports::WorkingDirectory;

/// Reads the working directory of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessWorkingDirectory;

impl ProcessWorkingDirectory {
    pub fn new() -> Self {
        Self
    }
}

impl WorkingDirectory for ProcessWorkingDirectory {
    fn current(&self) -> Result<OsString, AppError> {
        let dir = std::env::current_dir()
            .map_err(|e| AppError::WorkingDirectory { details: e.to_string() })?;
        Ok(dir.into_os_string())
    }
}
