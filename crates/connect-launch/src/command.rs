//! Application-identifier to launch-command resolution.
//!
//! One table row per supported (identifier, platform) pair. Supporting a
//! new application means adding rows, not branching in callers.

use connect_core::types::Platform;

/// Launch commands per application and platform.
///
/// macOS rows go through `open` — app bundles are opened indirectly, not
/// invoked as executables.
static LAUNCH_COMMANDS: &[(&str, Platform, &[&str])] = &[
    ("hieroplayer", Platform::Windows, &["hieroplayer.exe"]),
    (
        "hieroplayer",
        Platform::Macos,
        &["open", "/Applications/HieroPlayer1.8v1/HieroPlayer1.8v1.app"],
    ),
];

/// Resolve *identifier* on *platform* to an argument vector.
///
/// `None` means the pair is not supported and no launch should be
/// attempted; it is distinct from an error. Pure lookup, no OS access.
pub fn resolve(identifier: &str, platform: Platform) -> Option<Vec<String>> {
    LAUNCH_COMMANDS
        .iter()
        .find(|(id, target, _)| *id == identifier && *target == platform)
        .map(|(_, _, argv)| argv.iter().map(|arg| (*arg).to_string()).collect())
}
