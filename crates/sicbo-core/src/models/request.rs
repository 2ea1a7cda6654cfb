use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// The stdin record. Only `history` is read; other fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Past outcomes, oldest first. Absent means empty.
    #[serde(default)]
    pub history: String,
}

impl HistoryRequest {
    /// Parse raw stdin text.
    ///
    /// # Errors
    /// `InputError::Malformed` when the text is not a JSON object or
    /// `history` is present but not a string (including `null`).
    ///
    /// Duplicate keys keep the last value.
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| InputError::Malformed {
                reason: e.to_string(),
            })?;

        let object = value.as_object().ok_or_else(|| InputError::Malformed {
            reason: format!("expected a JSON object, got {}", json_kind(&value)),
        })?;

        let history = match object.get("history") {
            None => String::new(),
            Some(serde_json::Value::String(history)) => history.clone(),
            Some(other) => {
                return Err(InputError::Malformed {
                    reason: format!("`history` must be a string, got {}", json_kind(other)),
                })
            }
        };

        Ok(Self { history })
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
