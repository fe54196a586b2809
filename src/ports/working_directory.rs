use std::ffi::OsString;

use crate::domain::AppError;

pub trait WorkingDirectory {
    /// Absolute path of the directory the launcher was started from.
    fn current(&self) -> Result<OsString, AppError>;
}
