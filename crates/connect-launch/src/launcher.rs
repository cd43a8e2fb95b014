//! Detached process spawning.
//!
//! Spawn-and-release: the child is handed to the OS and the handle dropped
//! after reading its pid. Closing the launching application must not take
//! launched applications down with it, so the child gets its own session
//! on unix and its own console on windows. The launcher never waits for,
//! polls, or reaps the child.

use std::collections::BTreeMap;
use std::process::{Command, Stdio};

use connect_core::error::LaunchError;
use connect_core::types::LaunchResult;

/// Spawn *command* detached, with *environment* as the complete child
/// environment, and report the outcome.
///
/// An empty command is a resolver-level failure and is reported without
/// spawning. Spawn errors are logged with the failing command and folded
/// into the stable failure message; raw OS errors never reach the caller.
pub fn launch(
    identifier: &str,
    command: &[String],
    environment: &BTreeMap<String, String>,
) -> LaunchResult {
    if command.is_empty() {
        tracing::warn!(identifier, "refusing to launch empty command");
        return LaunchResult::failed(identifier);
    }

    match spawn_detached(command, environment) {
        Ok(pid) => {
            tracing::info!(identifier, pid, "application started");
            LaunchResult::started(identifier, pid)
        }
        Err(error) => {
            tracing::error!(identifier, ?command, %error, "application could not be started");
            LaunchResult::failed(identifier)
        }
    }
}

/// Spawn the child and return its pid, releasing the handle.
///
/// Stdio is nulled so no descriptors beyond the standard three reach the
/// child; std marks everything else close-on-exec on unix. Dropping the
/// `Child` does not kill it — non-ownership is intentional here.
fn spawn_detached(
    command: &[String],
    environment: &BTreeMap<String, String>,
) -> Result<u32, LaunchError> {
    let mut cmd = Command::new(&command[0]);
    cmd.args(&command[1..])
        .env_clear()
        .envs(environment)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    #[cfg(unix)]
    crate::unix::detach(&mut cmd);

    #[cfg(windows)]
    crate::windows::detach(&mut cmd);

    let child = cmd.spawn()?;
    Ok(child.id())
}
