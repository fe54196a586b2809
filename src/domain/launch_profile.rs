//! Fixed runtime location and arguments baked into the launcher.

/// Runtime executable location relative to the working directory.
#[cfg(windows)]
const RUNTIME_RELATIVE_PATH: &str = r"\jre\bin\java.exe";
/// Runtime executable location relative to the working directory.
#[cfg(not(windows))]
const RUNTIME_RELATIVE_PATH: &str = "/jre/bin/java";

/// Flags passed to the runtime ahead of the jar.
const RUNTIME_FLAGS: &str = "--enable-preview";

/// Application payload handed to the runtime.
const JAR_FILE: &str = "sequencer.jar";

/// The three constants that, together with the working directory, make up a launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchProfile {
    pub runtime_relative_path: &'static str,
    pub runtime_flags: &'static str,
    pub jar_file: &'static str,
}

impl LaunchProfile {
    /// Profile for the runtime shipped next to the launcher on this platform.
    pub const fn bundled() -> Self {
        Self {
            runtime_relative_path: RUNTIME_RELATIVE_PATH,
            runtime_flags: RUNTIME_FLAGS,
            jar_file: JAR_FILE,
        }
    }

    /// Profile used by the Windows distribution, available on every platform.
    pub const fn windows() -> Self {
        Self {
            runtime_relative_path: r"\jre\bin\java.exe",
            runtime_flags: RUNTIME_FLAGS,
            jar_file: JAR_FILE,
        }
    }
}

impl Default for LaunchProfile {
    fn default() -> Self {
        Self::bundled()
    }
}
