#[cfg(unix)]
mod interrupt_guard;
pub mod process_working_directory;
pub mod system_shell;

pub use process_working_directory::ProcessWorkingDirectory;
pub use system_shell::SystemShell;
