mod command_shell;
mod working_directory;

pub use command_shell::{CommandShell, ShellOutcome};
pub use working_directory::WorkingDirectory;
