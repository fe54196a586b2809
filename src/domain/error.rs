use std::io;

use thiserror::Error;

/// Library-wide error type for launcher operations.
///
/// None of these reach the user: the binary logs and discards them so the
/// process always exits successfully.
#[derive(Debug, Error)]
pub enum AppError {
    /// The current working directory could not be resolved.
    #[error("Failed to resolve current directory: {details}")]
    WorkingDirectory { details: String },

    /// The command interpreter could not be started.
    #[error("Failed to start {shell}: {details}")]
    ShellSpawn { shell: String, details: String },

    /// Writing to the console failed.
    #[error("Failed to write to console: {0}")]
    Console(io::Error),
}
