//! Windows detachment: give the child its own console.

#![cfg(windows)]

use std::os::windows::process::CommandExt;
use std::process::Command;

use windows_sys::Win32::System::Threading::CREATE_NEW_CONSOLE;

/// A new console keeps the child alive when the launching console closes
/// and out of the parent's ctrl-event delivery group.
pub fn detach(cmd: &mut Command) {
    cmd.creation_flags(CREATE_NEW_CONSOLE);
}
