use crate::domain::LaunchProfile;
use crate::ports::{CommandShell, WorkingDirectory};

/// Application context holding dependencies for a launch.
pub struct LaunchContext<W: WorkingDirectory, S: CommandShell> {
    working_directory: W,
    shell: S,
    profile: LaunchProfile,
}

impl<W: WorkingDirectory, S: CommandShell> LaunchContext<W, S> {
    /// Create a context using the bundled runtime profile.
    pub fn new(working_directory: W, shell: S) -> Self {
        Self::with_profile(working_directory, shell, LaunchProfile::bundled())
    }

    pub fn with_profile(working_directory: W, shell: S, profile: LaunchProfile) -> Self {
        Self { working_directory, shell, profile }
    }

    pub fn working_directory(&self) -> &W {
        &self.working_directory
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn profile(&self) -> &LaunchProfile {
        &self.profile
    }
}
