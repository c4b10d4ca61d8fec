//! Per-node step parameters.
//!
//! Config shapes are not typed per node kind. A config is any JSON object and
//! its values may be strings, numbers, booleans or nested JSON.

/// Untyped key/value parameters attached to a node.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

/// Errors from parsing user-edited raw config text.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("config parse failed: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("config must be a JSON object, got {kind}")]
  NotAnObject { kind: &'static str },
}

/// Parse raw config text as typed into an editor.
pub fn parse_config(raw: &str) -> Result<ConfigMap, ConfigError> {
  match serde_json::from_str::<serde_json::Value>(raw)? {
    serde_json::Value::Object(map) => Ok(map),
    other => Err(ConfigError::NotAnObject {
      kind: json_kind(&other),
    }),
  }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
  match value {
    serde_json::Value::Null => "null",
    serde_json::Value::Bool(_) => "a boolean",
    serde_json::Value::Number(_) => "a number",
    serde_json::Value::String(_) => "a string",
    serde_json::Value::Array(_) => "an array",
    serde_json::Value::Object(_) => "an object",
  }
}
