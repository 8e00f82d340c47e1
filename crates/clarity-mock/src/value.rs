//! Dynamically typed values passed to and returned from stubbed calls.
//!
//! Values convert to and from JSON so they can be written on the command
//! line and in scenario files:
//!
//! | JSON                                     | Value                     |
//! |------------------------------------------|---------------------------|
//! | `true` / `false`                         | `Bool`                    |
//! | `42`, `-7`                               | `Int`                     |
//! | `null`                                   | `Optional(None)`          |
//! | `"0x0123ab"`                             | `Buffer` (hex decoded)    |
//! | `"ST1PQHQ...GZGM"`, `"SP...abc.token"`   | `Principal`               |
//! | any other string                         | `String`                  |
//! | `[...]`                                  | `List`                    |
//! | `{"success": true, "value": ...}`        | `Envelope`                |
//! | any other object                         | `Tuple`                   |
//!
//! Inference can be overridden with `{"type": "<t>", "value": ...}` where
//! `<t>` is one of `int`, `uint`, `bool`, `buff`, `utf8`, `principal`,
//! `none`, `some` or `tuple`. A `buff` value is hex when `0x`-prefixed and
//! UTF-8 bytes otherwise. A `tuple` value is an object whose fields are
//! taken as-is, so records with `type` or `success` keys stay records.

use crate::envelope::CallEnvelope;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValueError {
    #[error(
        "Unsupported type: {0}. Supported types: int, uint, bool, buff, utf8, principal, none, some, tuple"
    )]
    UnsupportedType(String),

    #[error("Type/value mismatch: expected {expected} but got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Invalid hex buffer '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    #[error("JSON parsing error: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ValueError {
    fn from(err: serde_json::Error) -> Self {
        ValueError::Json(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClarityValue {
    Bool(bool),
    Int(i128),
    UInt(u128),
    Buffer(Vec<u8>),
    Principal(String),
    String(String),
    Optional(Option<Box<ClarityValue>>),
    List(Vec<ClarityValue>),
    Tuple(BTreeMap<String, ClarityValue>),
    Envelope(CallEnvelope),
}

impl ClarityValue {
    pub fn buffer(bytes: impl AsRef<[u8]>) -> Self {
        Self::Buffer(bytes.as_ref().to_vec())
    }

    /// Decode a hex string, with or without a `0x` prefix, into a buffer.
    pub fn buffer_from_hex(input: &str) -> Result<Self, ValueError> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        hex::decode(digits)
            .map(Self::Buffer)
            .map_err(|e| ValueError::InvalidHex {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn principal(address: impl Into<String>) -> Self {
        Self::Principal(address.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    pub fn none() -> Self {
        Self::Optional(None)
    }

    pub fn some(inner: ClarityValue) -> Self {
        Self::Optional(Some(Box::new(inner)))
    }

    pub fn tuple<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ClarityValue)>,
    {
        Self::Tuple(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn as_envelope(&self) -> Option<&CallEnvelope> {
        match self {
            Self::Envelope(envelope) => Some(envelope),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(n) => Some(*n),
            Self::UInt(n) => i128::try_from(*n).ok(),
            _ => None,
        }
    }

    pub fn as_buffer(&self) -> Option<&[u8]> {
        match self {
            Self::Buffer(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Equality that compares `Int` and `UInt` by numeric value, at any
    /// depth. Every other variant must match exactly.
    pub fn matches(&self, other: &ClarityValue) -> bool {
        match (self, other) {
            (Self::Int(_) | Self::UInt(_), Self::Int(_) | Self::UInt(_)) => {
                self.as_number() == other.as_number()
            }
            (Self::Optional(a), Self::Optional(b)) => match (a, b) {
                (Some(a), Some(b)) => a.matches(b),
                (None, None) => true,
                _ => false,
            },
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.matches(b))
            }
            (Self::Tuple(a), Self::Tuple(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.matches(vb))
            }
            (Self::Envelope(a), Self::Envelope(b)) => {
                a.success == b.success
                    && a.error == b.error
                    && match (a.value(), b.value()) {
                        (Some(a), Some(b)) => a.matches(b),
                        (None, None) => true,
                        _ => false,
                    }
            }
            _ => self == other,
        }
    }

    /// Integers widened so both signs compare; `None` for non-integers.
    fn as_number(&self) -> Option<(bool, u128)> {
        match self {
            Self::Int(n) => Some((*n < 0, n.unsigned_abs())),
            Self::UInt(n) => Some((false, *n)),
            _ => None,
        }
    }

    /// Short type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Buffer(_) => "buff",
            Self::Principal(_) => "principal",
            Self::String(_) => "utf8",
            Self::Optional(_) => "optional",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Envelope(_) => "envelope",
        }
    }

    /// Parse a JSON document into a single value.
    pub fn parse_json(input: &str) -> Result<Self, ValueError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    pub fn from_json(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(Self::none()),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => Self::from_number(n),
            Value::String(s) => Self::from_json_string(s),
            Value::Array(items) => items
                .iter()
                .map(Self::from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Object(map) => {
                if is_typed_annotation(map) {
                    return Self::from_annotation(map);
                }
                if let Some(envelope) = CallEnvelope::from_json_object(map)? {
                    return Ok(Self::Envelope(envelope));
                }
                map.iter()
                    .map(|(k, v)| Self::from_json(v).map(|v| (k.clone(), v)))
                    .collect::<Result<BTreeMap<_, _>, _>>()
                    .map(Self::Tuple)
            }
        }
    }

    /// Convert back to JSON. Values that would be inferred as a different
    /// variant on the way back in are written with a type annotation.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(n) => match i64::try_from(*n) {
                Ok(small) => Value::Number(small.into()),
                Err(_) => json!({"type": "int", "value": n.to_string()}),
            },
            Self::UInt(n) => match u64::try_from(*n) {
                Ok(small) => json!({"type": "uint", "value": small}),
                Err(_) => json!({"type": "uint", "value": n.to_string()}),
            },
            Self::Buffer(bytes) => Value::String(format!("0x{}", hex::encode(bytes))),
            Self::Principal(address) => {
                if looks_like_principal(address) {
                    Value::String(address.clone())
                } else {
                    json!({"type": "principal", "value": address})
                }
            }
            Self::String(text) => {
                if looks_like_principal(text) || looks_like_hex_buffer(text) {
                    json!({"type": "utf8", "value": text})
                } else {
                    Value::String(text.clone())
                }
            }
            Self::Optional(None) => Value::Null,
            Self::Optional(Some(inner)) => json!({"type": "some", "value": inner.to_json()}),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Tuple(fields) => {
                let object: Map<String, Value> = fields
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect();
                if is_typed_annotation(&object) || CallEnvelope::is_envelope_shaped(&object) {
                    json!({"type": "tuple", "value": object})
                } else {
                    Value::Object(object)
                }
            }
            Self::Envelope(envelope) => envelope.to_json(),
        }
    }

    fn from_number(n: &Number) -> Result<Self, ValueError> {
        if let Some(i) = n.as_i64() {
            Ok(Self::Int(i as i128))
        } else if let Some(u) = n.as_u64() {
            Ok(Self::Int(u as i128))
        } else {
            Err(ValueError::TypeMismatch {
                expected: "integer".to_string(),
                actual: n.to_string(),
            })
        }
    }

    fn from_json_string(s: &str) -> Result<Self, ValueError> {
        if looks_like_hex_buffer(s) {
            Self::buffer_from_hex(s)
        } else if looks_like_principal(s) {
            Ok(Self::Principal(s.to_string()))
        } else {
            Ok(Self::String(s.to_string()))
        }
    }

    fn from_annotation(map: &Map<String, Value>) -> Result<Self, ValueError> {
        let type_name = map
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_lowercase();
        let value = map.get("value").unwrap_or(&Value::Null);

        let mismatch = |expected: &str| ValueError::TypeMismatch {
            expected: expected.to_string(),
            actual: value.to_string(),
        };

        match type_name.as_str() {
            "int" => match value {
                Value::Number(n) => Self::from_number(n),
                Value::String(s) => s
                    .trim()
                    .parse::<i128>()
                    .map(Self::Int)
                    .map_err(|_| mismatch("int")),
                _ => Err(mismatch("int")),
            },
            "uint" => match value {
                Value::Number(n) => n
                    .as_u64()
                    .map(|u| Self::UInt(u as u128))
                    .ok_or_else(|| mismatch("uint")),
                Value::String(s) => s
                    .trim()
                    .parse::<u128>()
                    .map(Self::UInt)
                    .map_err(|_| mismatch("uint")),
                _ => Err(mismatch("uint")),
            },
            "bool" => value.as_bool().map(Self::Bool).ok_or_else(|| mismatch("bool")),
            "buff" => {
                let s = value.as_str().ok_or_else(|| mismatch("buff"))?;
                if s.starts_with("0x") {
                    Self::buffer_from_hex(s)
                } else {
                    Ok(Self::buffer(s))
                }
            }
            "utf8" | "string" => value
                .as_str()
                .map(|s| Self::String(s.to_string()))
                .ok_or_else(|| mismatch("utf8")),
            "principal" => value
                .as_str()
                .filter(|s| !s.is_empty())
                .map(|s| Self::Principal(s.to_string()))
                .ok_or_else(|| mismatch("principal")),
            "none" => Ok(Self::none()),
            "some" => Self::from_json(value).map(Self::some),
            "tuple" => value
                .as_object()
                .ok_or_else(|| mismatch("tuple"))?
                .iter()
                .map(|(k, v)| Self::from_json(v).map(|v| (k.clone(), v)))
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Self::Tuple),
            other => Err(ValueError::UnsupportedType(other.to_string())),
        }
    }
}

fn is_typed_annotation(map: &Map<String, Value>) -> bool {
    map.get("type").map(Value::is_string).unwrap_or(false)
        && map.keys().all(|k| k == "type" || k == "value")
}

fn looks_like_hex_buffer(s: &str) -> bool {
    s.strip_prefix("0x")
        .map(|digits| digits.len() % 2 == 0 && digits.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

/// Standard Stacks addresses are a version prefix followed by a c32 body;
/// contract principals append `.contract-name`.
fn looks_like_principal(s: &str) -> bool {
    let (address, contract) = match s.split_once('.') {
        Some((address, name)) => (address, Some(name)),
        None => (s, None),
    };
    let prefixed = ["SP", "ST", "SM", "SN"]
        .iter()
        .any(|prefix| address.starts_with(prefix));
    let body_ok = (28..=41).contains(&address.len())
        && address
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase());
    let contract_ok = contract
        .map(|name| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .unwrap_or(true);
    prefixed && body_ok && contract_ok
}

impl fmt::Display for ClarityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for ClarityValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClarityValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}

impl From<CallEnvelope> for ClarityValue {
    fn from(envelope: CallEnvelope) -> Self {
        Self::Envelope(envelope)
    }
}

impl From<bool> for ClarityValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i128> for ClarityValue {
    fn from(n: i128) -> Self {
        Self::Int(n)
    }
}

impl From<u128> for ClarityValue {
    fn from(n: u128) -> Self {
        Self::UInt(n)
    }
}
