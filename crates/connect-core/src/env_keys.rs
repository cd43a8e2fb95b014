//! Environment-variable names forming the launch contract.
//!
//! Downstream applications read these names verbatim, so they are part of
//! the external interface and must not change.

/// Server URL of the connect instance.
pub const FTRACK_SERVER: &str = "FTRACK_SERVER";

/// API key for the embedded API.
pub const FTRACK_APIKEY: &str = "FTRACK_APIKEY";

/// Login name of the launching user.
pub const LOGNAME: &str = "LOGNAME";

/// Search path for location plugins.
pub const FTRACK_LOCATION_PLUGIN_PATH: &str = "FTRACK_LOCATION_PLUGIN_PATH";

/// Runtime library search path for the embedded API.
pub const PYTHONPATH: &str = "PYTHONPATH";

/// Base64-of-JSON encoded launch event payload.
pub const FTRACK_CONNECT_EVENT: &str = "FTRACK_CONNECT_EVENT";

/// Variables copied from the launching process into every child
/// environment. Each key is always present in the built environment,
/// empty when the launching process does not define it.
pub const INHERITED: &[&str] = &[
    FTRACK_SERVER,
    FTRACK_APIKEY,
    LOGNAME,
    FTRACK_LOCATION_PLUGIN_PATH,
    PYTHONPATH,
];
