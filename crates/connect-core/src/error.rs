//! Error taxonomy for launch attempts.
//!
//! None of these cross the public boundary raw: every variant is terminal
//! for its single attempt and gets folded into a failed
//! [`LaunchResult`](crate::types::LaunchResult) after the detail is logged.

use crate::types::Platform;

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// No command mapping exists for this identifier on this platform.
    /// Means "do not attempt a launch", not a fault.
    #[error("no launch command for {identifier:?} on {platform:?}")]
    UnsupportedTarget {
        identifier: String,
        platform: Platform,
    },

    /// Launch context could not be serialized for transport. Recovered
    /// locally: the context variable is omitted and the launch proceeds.
    #[error("launch context could not be encoded: {0}")]
    ContextEncoding(#[from] serde_json::Error),

    /// The OS refused or failed to create the child process.
    #[error("process spawn failed: {0}")]
    Spawn(#[from] std::io::Error),
}
