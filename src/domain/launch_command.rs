use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;

use super::LaunchProfile;

/// Characters the command interpreter treats specially when left unquoted.
const SHELL_SENSITIVE: &[char] =
    &['"', '\'', '`', '$', '&', '|', ';', '<', '>', '(', ')', '^', '%', '!', '*', '?'];

/// Command line handed verbatim to the system command interpreter.
///
/// Built as `<dir><runtime path> <flags> <jar>` with no quoting, so directories
/// containing whitespace or shell metacharacters produce a line the shell
/// splits differently. [`LaunchCommand::needs_quoting`] reports that case.
///
/// The directory keeps its native encoding; only [`fmt::Display`] is lossy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    working_dir: OsString,
    line: OsString,
}

impl LaunchCommand {
    pub fn new(working_dir: &OsStr, profile: &LaunchProfile) -> Self {
        let mut line = working_dir.to_os_string();
        line.push(profile.runtime_relative_path);
        line.push(" ");
        line.push(profile.runtime_flags);
        line.push(" ");
        line.push(profile.jar_file);
        Self { working_dir: working_dir.to_os_string(), line }
    }

    /// The full command line, byte-for-byte as the shell receives it.
    pub fn as_os_str(&self) -> &OsStr {
        &self.line
    }

    /// The command line for display, with invalid sequences replaced.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        self.line.to_string_lossy()
    }

    /// Directory the runtime path was resolved against.
    pub fn working_dir(&self) -> &OsStr {
        &self.working_dir
    }

    /// Whether the unquoted directory would be split or reinterpreted by the shell.
    pub fn needs_quoting(&self) -> bool {
        self.working_dir
            .to_string_lossy()
            .chars()
            .any(|c| c.is_whitespace() || SHELL_SENSITIVE.contains(&c))
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
