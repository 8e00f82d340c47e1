use crate::value::{ClarityValue, ValueError};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Caller is not permitted to perform the operation.
pub const ERR_UNAUTHORIZED: u32 = 403;
/// The referenced record does not exist.
pub const ERR_NOT_FOUND: u32 = 404;

/// The `{ success, value?, error? }` response shape returned by simulated
/// contract functions.
///
/// The harness transports envelopes verbatim; it never interprets `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<ClarityValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<u32>,
}

impl CallEnvelope {
    pub fn ok() -> Self {
        Self {
            success: true,
            value: None,
            error: None,
        }
    }

    pub fn ok_with(value: ClarityValue) -> Self {
        Self {
            success: true,
            value: Some(Box::new(value)),
            error: None,
        }
    }

    pub fn err(code: u32) -> Self {
        Self {
            success: false,
            value: None,
            error: Some(code),
        }
    }

    pub fn value(&self) -> Option<&ClarityValue> {
        self.value.as_deref()
    }

    /// A boolean `success` and nothing besides `value` and `error`.
    pub fn is_envelope_shaped(map: &Map<String, Value>) -> bool {
        map.get("success").map(Value::is_boolean).unwrap_or(false)
            && map
                .keys()
                .all(|k| matches!(k.as_str(), "success" | "value" | "error"))
    }

    /// Reads an envelope out of a JSON object.
    ///
    /// Returns `Ok(None)` when the object is not envelope-shaped. A present
    /// `"value": null` is kept as `Optional(None)`; only a missing key means
    /// no value.
    pub fn from_json_object(map: &Map<String, Value>) -> Result<Option<Self>, ValueError> {
        if !Self::is_envelope_shaped(map) {
            return Ok(None);
        }
        let success = map.get("success").and_then(Value::as_bool).unwrap_or(false);

        let value = match map.get("value") {
            None => None,
            Some(v) => Some(Box::new(ClarityValue::from_json(v)?)),
        };
        let error = match map.get("error") {
            None | Some(Value::Null) => None,
            Some(v) => Some(
                v.as_u64()
                    .and_then(|code| u32::try_from(code).ok())
                    .ok_or_else(|| ValueError::TypeMismatch {
                        expected: "numeric error code".to_string(),
                        actual: v.to_string(),
                    })?,
            ),
        };

        Ok(Some(Self {
            success,
            value,
            error,
        }))
    }

    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("success".to_string(), Value::Bool(self.success));
        if let Some(value) = &self.value {
            map.insert("value".to_string(), value.to_json());
        }
        if let Some(code) = self.error {
            map.insert("error".to_string(), Value::from(code));
        }
        Value::Object(map)
    }
}

impl fmt::Display for CallEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
