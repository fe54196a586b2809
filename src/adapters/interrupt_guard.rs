//! Console interrupt handling while the launcher waits on its child.
//!
//! Ctrl+C and Ctrl+\ reach the whole foreground process group. The child
//! keeps the caller's dispositions and reacts to them; the launcher ignores
//! them until the child is gone, then puts the previous dispositions back.

use std::io;
use std::os::unix::process::CommandExt;
use std::process::Command;

use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

const INTERRUPTS: [Signal; 2] = [Signal::SIGINT, Signal::SIGQUIT];

/// Ignores SIGINT and SIGQUIT in this process until dropped.
pub(crate) struct InterruptGuard {
    saved: Vec<(Signal, SigAction)>,
}

impl InterruptGuard {
    pub(crate) fn ignore() -> nix::Result<Self> {
        let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
        let mut guard = Self { saved: Vec::with_capacity(INTERRUPTS.len()) };
        for signal in INTERRUPTS {
            // SAFETY: SIG_IGN installs no handler code.
            let previous = unsafe { sigaction(signal, &ignore) }?;
            guard.saved.push((signal, previous));
        }
        Ok(guard)
    }

    /// Make `command`'s child start with the dispositions in force before [`InterruptGuard::ignore`].
    pub(crate) fn restore_in_child(&self, command: &mut Command) {
        let saved = self.saved.clone();
        let restore = move || -> io::Result<()> {
            for (signal, action) in &saved {
                // SAFETY: sigaction is async-signal-safe and `saved` was allocated before fork.
                unsafe { sigaction(*signal, action) }?;
            }
            Ok(())
        };
        // SAFETY: the closure only calls sigaction.
        unsafe {
            command.pre_exec(restore);
        }
    }

    #[cfg(test)]
    fn previous_handler(&self, signal: Signal) -> Option<SigHandler> {
        self.saved.iter().find(|(s, _)| *s == signal).map(|(_, action)| action.handler())
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        for (signal, action) in self.saved.iter().rev() {
            // SAFETY: restores a disposition previously returned by sigaction.
            let _ = unsafe { sigaction(*signal, action) };
        }
    }
}
