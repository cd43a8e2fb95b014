//! Application-launch orchestration.
//!
//! Control flow for one request: resolve the application identifier to a
//! platform command, build the sanitized child environment, spawn detached.
//! The caller always receives a well-formed [`LaunchResult`]; OS and
//! encoding errors are logged here and never escape.

pub mod command;
pub mod env;
pub mod launcher;

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use connect_core::error::LaunchError;
use connect_core::types::{LaunchRequest, LaunchResult, Platform};
use serde_json::{Map, Value};

/// Launch *identifier* with the given event *context* and *extra* payload.
///
/// Entry point for the event-dispatch collaborator. Synchronous; returns as
/// soon as the child is handed to the OS. Calls are independent and may run
/// concurrently. The process environment is read as a snapshot at call
/// time — callers must not mutate it concurrently with a launch.
pub fn launch_application(
    identifier: &str,
    context: Value,
    extra: Map<String, Value>,
) -> LaunchResult {
    let platform = Platform::current();
    let Some(argv) = command::resolve(identifier, platform) else {
        let error = LaunchError::UnsupportedTarget {
            identifier: identifier.to_string(),
            platform,
        };
        tracing::warn!(%error, "launch skipped");
        return LaunchResult::failed(identifier);
    };

    let mut request = LaunchRequest::new(identifier, context);
    request.extra = extra;

    let environment = env::build(&env::EnvSnapshot::from_process(), &request);
    launcher::launch(identifier, &argv, &environment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_identifier_yields_failed_result() {
        let result = launch_application("no-such-app", json!({}), Map::new());
        assert!(!result.success);
        assert_eq!(
            result.message,
            "no-such-app application could not be started."
        );
        assert_eq!(result.pid, None);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn hieroplayer_is_not_supported_on_linux() {
        let result = launch_application("hieroplayer", json!({"entity": 42}), Map::new());
        assert!(!result.success);
        assert_eq!(
            result.message,
            "hieroplayer application could not be started."
        );
    }
}
