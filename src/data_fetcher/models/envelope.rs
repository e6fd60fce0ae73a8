use serde::Deserialize;
use serde_json::Value;

/// Wrapper every football API response arrives in.
///
/// `errors` is an empty array on success and an object (or, rarely, a
/// string) describing the problem otherwise, even on HTTP 200.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub get: Option<String>,
    #[serde(default)]
    pub errors: Value,
    #[serde(default)]
    pub results: Option<u32>,
    pub response: T,
}

impl<T> ApiEnvelope<T> {
    pub fn has_errors(&self) -> bool {
        match &self.errors {
            Value::Null => false,
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
            Value::String(text) => !text.is_empty(),
            Value::Bool(flag) => *flag,
            Value::Number(_) => true,
        }
    }

    /// Compact rendering of the errors field for messages and logs.
    pub fn errors_summary(&self) -> String {
        self.errors.to_string()
    }
}
