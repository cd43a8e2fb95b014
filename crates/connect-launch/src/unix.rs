//! Unix detachment: new session, no controlling terminal.

#![cfg(unix)]

use std::os::unix::process::CommandExt;
use std::process::Command;

/// Put the child in its own session so terminal signals aimed at the
/// parent's process group, and the parent's own exit, cannot reach it.
pub fn detach(cmd: &mut Command) {
    // setsid cannot fail here: the freshly forked child is never already a
    // process-group leader. Async-signal-safe, allocates nothing.
    unsafe {
        cmd.pre_exec(|| {
            libc::setsid();
            Ok(())
        });
    }
}
