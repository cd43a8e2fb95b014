//! Shared launch types.
//!
//! These types are the currency between the event-dispatch collaborator and
//! the launch orchestration in `connect-launch`. They intentionally carry
//! only what a launch needs — no UI or event-bus internals.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single application-launch request.
///
/// Serializes to the flat JSON object downstream applications decode from
/// `FTRACK_CONNECT_EVENT`: `applicationIdentifier` and `context` at top
/// level, with every `extra` entry flattened alongside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRequest {
    /// Opaque identifier naming the target application (not a file path).
    pub application_identifier: String,
    /// Arbitrary structured payload describing why/how the application is
    /// being launched.
    #[serde(default)]
    pub context: Value,
    /// Additional payload entries, carried flat in the encoded event.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LaunchRequest {
    pub fn new(application_identifier: impl Into<String>, context: Value) -> Self {
        Self {
            application_identifier: application_identifier.into(),
            context,
            extra: Map::new(),
        }
    }
}

/// Outcome of one launch attempt.
///
/// Value type: produced once per attempt, never mutated afterwards. The
/// message is stable and user-presentable; diagnostic detail goes to the
/// log, not the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchResult {
    pub success: bool,
    pub message: String,
    /// Pid of the spawned child. Informational only — the child is not a
    /// managed resource of this library after spawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pid: Option<u32>,
}

impl LaunchResult {
    /// Successful launch of *identifier* with child *pid*.
    pub fn started(identifier: &str, pid: u32) -> Self {
        Self {
            success: true,
            message: format!("{identifier} application started. (pid={pid})"),
            pid: Some(pid),
        }
    }

    /// Failed launch of *identifier*, regardless of the underlying cause.
    pub fn failed(identifier: &str) -> Self {
        Self {
            success: false,
            message: format!("{identifier} application could not be started."),
            pid: None,
        }
    }
}

/// Host platform, as far as command resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    Macos,
    Linux,
    Other,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Macos
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}
