//! Resolve a `(contract, function)` pair to its stub and invoke it.
//!
//! The dispatcher holds no state of its own and never validates arguments:
//! it forwards them to the stub and hands back whatever was configured.

use crate::contracts::KnownFunction;
use crate::envelope::CallEnvelope;
use crate::error::{LookupError, MockError};
use crate::mock::MockRegistry;
use crate::value::ClarityValue;
use tracing::{debug, warn};

/// Invoke `contract.function` with `args`.
///
/// Returns the configured value, or `None` when the stub was never
/// configured (or was configured to return nothing). Unknown contracts and
/// functions are a [`LookupError`].
pub fn call(
    registry: &mut MockRegistry,
    contract: &str,
    function: &str,
    args: &[ClarityValue],
) -> Result<Option<ClarityValue>, LookupError> {
    let returned = match registry.stub_mut(contract, function) {
        Ok(stub) => stub.invoke(args),
        Err(err) => {
            warn!(contract, function, "No stub registered for contract call");
            return Err(err);
        }
    };
    registry.record_call(contract, function, args.len(), returned.as_ref());

    match &returned {
        Some(value) => debug!(
            contract,
            function,
            args = args.len(),
            returned = %value,
            "Dispatched call"
        ),
        None => debug!(
            contract,
            function,
            args = args.len(),
            "Dispatched call to unconfigured stub"
        ),
    }
    Ok(returned)
}

pub fn call_known(
    registry: &mut MockRegistry,
    function: KnownFunction,
    args: &[ClarityValue],
) -> Result<Option<ClarityValue>, LookupError> {
    call(registry, function.contract(), function.function(), args)
}

/// Like [`call`], but the configured value must be a [`CallEnvelope`].
pub fn call_envelope(
    registry: &mut MockRegistry,
    contract: &str,
    function: &str,
    args: &[ClarityValue],
) -> Result<Option<CallEnvelope>, MockError> {
    match call(registry, contract, function, args)? {
        None => Ok(None),
        Some(ClarityValue::Envelope(envelope)) => Ok(Some(envelope)),
        Some(other) => Err(MockError::NotAnEnvelope {
            contract: contract.to_string(),
            function: function.to_string(),
            actual: other.to_string(),
        }),
    }
}

/// A registry borrowed for calls against a single contract.
pub struct ContractClient<'r> {
    contract: String,
    registry: &'r mut MockRegistry,
}

impl<'r> ContractClient<'r> {
    pub fn new(registry: &'r mut MockRegistry, contract: &str) -> Self {
        Self {
            contract: contract.to_string(),
            registry,
        }
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    pub fn call(
        &mut self,
        function: &str,
        args: &[ClarityValue],
    ) -> Result<Option<ClarityValue>, LookupError> {
        call(self.registry, &self.contract, function, args)
    }

    pub fn call_envelope(
        &mut self,
        function: &str,
        args: &[ClarityValue],
    ) -> Result<Option<CallEnvelope>, MockError> {
        call_envelope(self.registry, &self.contract, function, args)
    }
}
