use crate::value::ValueError;
use thiserror::Error;

/// Raised when a call names a contract or function the registry does not know.
///
/// This is a test-setup bug, never a simulated domain failure: domain
/// failures travel inside the returned envelope.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown contract '{contract}'")]
    UnknownContract { contract: String },

    #[error("Unknown function '{function}' on contract '{contract}'")]
    UnknownFunction { contract: String, function: String },
}

#[derive(Debug, Error)]
pub enum MockError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("Invalid mock '{spec}': {reason}")]
    InvalidSpec { spec: String, reason: String },

    #[error("Expected a call envelope from {contract}.{function}, got {actual}")]
    NotAnEnvelope {
        contract: String,
        function: String,
        actual: String,
    },
}
