//! JSON to call-argument parsing
//!
//! A JSON array becomes one argument per element; any other JSON value
//! becomes a single argument. Element conversion follows
//! [`clarity_mock::value`]: `0x` hex strings are buffers, Stacks addresses
//! are principals and `{"type": "uint", "value": 1}` forces a type.

use clarity_mock::{ClarityValue, ValueError};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during argument parsing
#[derive(Debug, Error)]
pub enum ArgumentParseError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to convert value: {0}")]
    ConversionError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Empty arguments")]
    EmptyArguments,
}

impl From<serde_json::Error> for ArgumentParseError {
    fn from(err: serde_json::Error) -> Self {
        ArgumentParseError::JsonError(err.to_string())
    }
}

impl From<ValueError> for ArgumentParseError {
    fn from(err: ValueError) -> Self {
        ArgumentParseError::ConversionError(err.to_string())
    }
}

/// Argument parser for converting JSON to call arguments
#[derive(Debug, Default)]
pub struct ArgumentParser;

impl ArgumentParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a JSON string into positional call arguments.
    ///
    /// ```
    /// use clarity_harness::utils::ArgumentParser;
    ///
    /// let args = ArgumentParser::new()
    ///     .parse_args_string(r#"["0x0123", "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM", 1]"#)
    ///     .unwrap();
    /// assert_eq!(args.len(), 3);
    /// ```
    pub fn parse_args_string(
        &self,
        json_str: &str,
    ) -> Result<Vec<ClarityValue>, ArgumentParseError> {
        if json_str.trim().is_empty() {
            return Err(ArgumentParseError::EmptyArguments);
        }

        let value: Value = serde_json::from_str(json_str)?;
        self.parse_value(&value)
    }

    fn parse_value(&self, value: &Value) -> Result<Vec<ClarityValue>, ArgumentParseError> {
        match value {
            Value::Array(arr) => {
                debug!("Parsing array with {} elements", arr.len());
                arr.iter()
                    .enumerate()
                    .map(|(i, v)| {
                        ClarityValue::from_json(v).map_err(|e| {
                            warn!("Failed to parse array element {}: {}", i, e);
                            ArgumentParseError::ConversionError(format!(
                                "Array element {}: {}",
                                i, e
                            ))
                        })
                    })
                    .collect()
            }
            _ => {
                debug!("Parsing single value");
                Ok(vec![ClarityValue::from_json(value)?])
            }
        }
    }
}

/// Parse a stubbed return value; the literal `undefined` means an absent result.
pub fn parse_return_value(raw: &str) -> Result<Option<ClarityValue>, ArgumentParseError> {
    let raw = raw.trim();
    if raw == "undefined" {
        return Ok(None);
    }
    if raw.is_empty() {
        return Err(ArgumentParseError::EmptyArguments);
    }
    Ok(Some(ClarityValue::parse_json(raw)?))
}

/// Split a `NAME=VALUE` global override.
pub fn parse_global(spec: &str) -> Result<(String, String), ArgumentParseError> {
    let (name, value) = spec.split_once('=').ok_or_else(|| {
        ArgumentParseError::InvalidArgument(format!("Invalid global '{spec}'. Expected NAME=VALUE"))
    })?;
    let name = name.trim();
    let value = value.trim();
    if name.is_empty() || value.is_empty() {
        return Err(ArgumentParseError::InvalidArgument(format!(
            "Invalid global '{spec}'. NAME and VALUE are required"
        )));
    }
    Ok((name.to_string(), value.to_string()))
}
