pub mod error;
mod launch_command;
mod launch_profile;

pub use error::AppError;
pub use launch_command::LaunchCommand;
pub use launch_profile::LaunchProfile;
