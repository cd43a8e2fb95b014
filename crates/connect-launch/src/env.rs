//! Child-environment construction.
//!
//! A launched application gets its environment built from scratch: a fixed
//! allow-list copied from the launching process, plus the entire launch
//! request encoded as base64-of-JSON under `FTRACK_CONNECT_EVENT`. Base64
//! keeps the value free of control characters and whitespace ambiguity on
//! every platform.

use std::collections::BTreeMap;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use connect_core::env_keys;
use connect_core::error::LaunchError;
use connect_core::types::LaunchRequest;
use serde_json::{Map, Value};

/// Read-only snapshot of the inherited process environment.
///
/// Taken explicitly so [`build`] stays pure and testable without touching
/// the real process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl From<BTreeMap<String, String>> for EnvSnapshot {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}

/// Build the child environment for *request*.
///
/// The allow-listed keys are always present, empty when the snapshot lacks
/// them. A request that fails to encode is logged and the event variable
/// omitted; the build itself never fails.
pub fn build(snapshot: &EnvSnapshot, request: &LaunchRequest) -> BTreeMap<String, String> {
    let mut staged = Map::new();

    for key in env_keys::INHERITED {
        let value = match snapshot.get(key) {
            Some(value) => Value::String(value.to_string()),
            None => Value::Null,
        };
        staged.insert((*key).to_string(), value);
    }

    match serde_json::to_string(request) {
        Ok(payload) => {
            staged.insert(
                env_keys::FTRACK_CONNECT_EVENT.to_string(),
                Value::String(BASE64.encode(payload)),
            );
        }
        Err(error) => {
            let error = LaunchError::from(error);
            tracing::error!(
                identifier = %request.application_identifier,
                %error,
                "omitting {}",
                env_keys::FTRACK_CONNECT_EVENT,
            );
        }
    }

    // Environment must contain only strings.
    let environment = flatten(conform(Value::Object(staged)));
    tracing::debug!(keys = ?environment.keys().collect::<Vec<_>>(), "child environment built");
    environment
}

/// Coerce *value* to the string-only shape a process environment accepts.
///
/// Total over the closed set of JSON value kinds: strings pass through,
/// other scalars convert with their canonical text form, sequences become
/// their JSON text, mappings recurse per entry (map semantics give
/// last-write-wins on key collision). Idempotent; non-mapping input is
/// converted, never rejected.
pub fn conform(value: Value) -> Value {
    match value {
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key, conform(value)))
                .collect(),
        ),
        Value::String(text) => Value::String(text),
        Value::Null => Value::String(String::new()),
        Value::Bool(flag) => Value::String(flag.to_string()),
        Value::Number(number) => Value::String(number.to_string()),
        Value::Array(items) => Value::String(Value::Array(items).to_string()),
    }
}

/// Collapse a conformed mapping into the final string-to-string map.
///
/// After [`conform`] every leaf is a string; a nested mapping that survived
/// is exported as its JSON text, since one variable holds one string.
fn flatten(value: Value) -> BTreeMap<String, String> {
    let Value::Object(entries) = value else {
        return BTreeMap::new();
    };

    entries
        .into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(text) => text,
                nested => nested.to_string(),
            };
            (key, text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> LaunchRequest {
        LaunchRequest::new("hieroplayer", json!({"foo": 1, "bar": {"baz": 2}}))
    }

    #[test]
    fn conform_stringifies_every_leaf() {
        let conformed = conform(json!({
            "a": 1,
            "b": {"c": true, "d": null},
            "e": [1, 2],
        }));
        assert_eq!(conformed["a"], json!("1"));
        assert_eq!(conformed["b"]["c"], json!("true"));
        assert_eq!(conformed["b"]["d"], json!(""));
        assert_eq!(conformed["e"], json!("[1,2]"));
    }

    #[test]
    fn conform_is_idempotent() {
        let once = conform(json!({
            "a": 2.5,
            "b": {"c": [true, null], "d": {"e": 7}},
        }));
        assert_eq!(conform(once.clone()), once);
    }

    #[test]
    fn conform_accepts_non_mapping_input() {
        assert_eq!(conform(json!("text")), json!("text"));
        assert_eq!(conform(json!(3)), json!("3"));
        assert_eq!(conform(json!([1, "x"])), json!("[1,\"x\"]"));
    }

    #[test]
    fn build_always_inserts_allow_listed_keys() {
        let environment = build(&EnvSnapshot::default(), &request());
        for key in env_keys::INHERITED {
            assert_eq!(environment.get(*key), Some(&String::new()), "{key} missing");
        }
    }

    #[test]
    fn build_copies_only_allow_listed_values_from_snapshot() {
        let mut vars = BTreeMap::new();
        vars.insert(
            "FTRACK_SERVER".to_string(),
            "https://example.ftrackapp.com".to_string(),
        );
        vars.insert("LOGNAME".to_string(), "reviewer".to_string());
        vars.insert("HOME".to_string(), "/home/reviewer".to_string());

        let environment = build(&EnvSnapshot::from(vars), &request());
        assert_eq!(
            environment.get(env_keys::FTRACK_SERVER).map(String::as_str),
            Some("https://example.ftrackapp.com")
        );
        assert_eq!(
            environment.get(env_keys::LOGNAME).map(String::as_str),
            Some("reviewer")
        );
        assert!(!environment.contains_key("HOME"));
    }

    #[test]
    fn build_encodes_request_as_base64_of_json() {
        let environment = build(&EnvSnapshot::default(), &request());
        let encoded = environment.get(env_keys::FTRACK_CONNECT_EVENT).unwrap();

        let decoded: Value =
            serde_json::from_slice(&BASE64.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded["applicationIdentifier"], json!("hieroplayer"));
        assert_eq!(decoded["context"]["foo"], json!(1));
        assert_eq!(decoded["context"]["bar"]["baz"], json!(2));
    }

    #[test]
    fn build_flattens_extra_payload_into_the_event() {
        let mut request = request();
        request
            .extra
            .insert("source".to_string(), json!("review-session"));

        let environment = build(&EnvSnapshot::default(), &request);
        let encoded = environment.get(env_keys::FTRACK_CONNECT_EVENT).unwrap();
        let decoded: Value =
            serde_json::from_slice(&BASE64.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded["source"], json!("review-session"));
    }

    #[test]
    fn empty_context_still_yields_event_and_allow_list() {
        let environment = build(
            &EnvSnapshot::default(),
            &LaunchRequest::new("hieroplayer", Value::Null),
        );
        assert!(environment.contains_key(env_keys::FTRACK_CONNECT_EVENT));
        assert_eq!(environment.len(), env_keys::INHERITED.len() + 1);
    }
}
