use crate::contracts::{fixtures, KnownFunction, TX_SENDER};
use crate::error::{LookupError, MockError};
use crate::value::ClarityValue;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

#[derive(Clone, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct MockKey {
    pub contract: String,
    pub function: String,
}

impl MockKey {
    pub fn new(contract: &str, function: &str) -> Self {
        Self {
            contract: contract.to_string(),
            function: function.to_string(),
        }
    }
}

impl From<KnownFunction> for MockKey {
    fn from(f: KnownFunction) -> Self {
        Self::new(f.contract(), f.function())
    }
}

impl fmt::Display for MockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.contract, self.function)
    }
}

/// Arguments passed to one stub invocation, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub args: Vec<ClarityValue>,
}

/// A configurable stand-in for one contract function.
#[derive(Clone, Debug, Default)]
pub struct Stub {
    configured: Option<ClarityValue>,
    invocations: Vec<Invocation>,
}

impl Stub {
    /// Replaces the configured return value. `None` makes the stub return
    /// an absent result.
    pub fn configure(&mut self, value: Option<ClarityValue>) {
        self.configured = value;
    }

    pub fn return_value(&self) -> Option<&ClarityValue> {
        self.configured.as_ref()
    }

    pub fn invoke(&mut self, args: &[ClarityValue]) -> Option<ClarityValue> {
        self.invocations.push(Invocation {
            args: args.to_vec(),
        });
        self.configured.clone()
    }

    pub fn invocations(&self) -> &[Invocation] {
        &self.invocations
    }

    pub fn reset(&mut self) {
        self.configured = None;
        self.invocations.clear();
    }
}

#[derive(Clone, Debug)]
pub struct MockCallLogEntry {
    pub contract: String,
    pub function: String,
    pub args_count: usize,
    pub returned: Option<String>,
}

/// Stubs keyed by contract then function, plus the simulated chain globals.
///
/// A registry is an ordinary owned value: build a fresh one per test (or
/// call [`MockRegistry::reset`]) and pass it to the dispatcher explicitly.
#[derive(Clone, Debug)]
pub struct MockRegistry {
    contracts: BTreeMap<String, BTreeMap<String, Stub>>,
    globals: BTreeMap<String, String>,
    calls: Vec<MockCallLogEntry>,
}

impl Default for MockRegistry {
    fn default() -> Self {
        let mut globals = BTreeMap::new();
        globals.insert(TX_SENDER.to_string(), fixtures::PATIENT.to_string());
        Self {
            contracts: BTreeMap::new(),
            globals,
            calls: Vec::new(),
        }
    }
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every [`KnownFunction`] declared and unconfigured.
    pub fn with_known_contracts() -> Self {
        let mut registry = Self::default();
        for f in KnownFunction::ALL {
            registry.declare(f.contract(), f.function());
        }
        registry
    }

    /// Parses `CONTRACT.function=<json>` mock specs on top of the known
    /// contracts. Pairs that are not yet known are declared.
    pub fn from_specs(specs: &[String]) -> Result<Self, MockError> {
        let mut registry = Self::with_known_contracts();
        registry.apply_specs(specs)?;
        Ok(registry)
    }

    pub fn apply_specs(&mut self, specs: &[String]) -> Result<(), MockError> {
        for spec in specs {
            let (key, value) = Self::parse_spec(spec)?;
            self.declare(&key.contract, &key.function);
            self.stub_mut(&key.contract, &key.function)?.configure(value);
        }
        Ok(())
    }

    /// Adds an unconfigured stub. Declaring an existing pair is a no-op.
    pub fn declare(&mut self, contract: &str, function: &str) {
        self.contracts
            .entry(contract.to_string())
            .or_default()
            .entry(function.to_string())
            .or_default();
    }

    pub fn declare_contract(&mut self, contract: &str, functions: &[&str]) {
        for function in functions {
            self.declare(contract, function);
        }
    }

    pub fn is_declared(&self, contract: &str, function: &str) -> bool {
        self.stub(contract, function).is_ok()
    }

    pub fn contract_names(&self) -> impl Iterator<Item = &str> {
        self.contracts.keys().map(String::as_str)
    }

    pub fn functions(&self, contract: &str) -> Result<impl Iterator<Item = &str>, LookupError> {
        self.contracts
            .get(contract)
            .map(|stubs| stubs.keys().map(String::as_str))
            .ok_or_else(|| LookupError::UnknownContract {
                contract: contract.to_string(),
            })
    }

    /// Sets the value subsequent calls to `contract.function` return. Last
    /// write wins.
    pub fn configure(
        &mut self,
        contract: &str,
        function: &str,
        value: ClarityValue,
    ) -> Result<(), LookupError> {
        debug!(contract, function, value = %value, "Configuring stub");
        self.stub_mut(contract, function)?.configure(Some(value));
        Ok(())
    }

    /// Makes `contract.function` return an absent result.
    pub fn configure_absent(&mut self, contract: &str, function: &str) -> Result<(), LookupError> {
        debug!(contract, function, "Configuring stub to return nothing");
        self.stub_mut(contract, function)?.configure(None);
        Ok(())
    }

    /// Configures a known function, declaring it first if this registry was
    /// built without it.
    pub fn configure_known(&mut self, function: KnownFunction, value: ClarityValue) {
        debug!(function = %function, value = %value, "Configuring stub");
        self.stub_mut_or_declared(function.contract(), function.function())
            .configure(Some(value));
    }

    /// Clears every configured value and all invocation history. Declared
    /// stubs and globals survive.
    pub fn reset(&mut self) {
        debug!(calls = self.calls.len(), "Resetting mock registry");
        for stub in self.contracts.values_mut().flat_map(BTreeMap::values_mut) {
            stub.reset();
        }
        self.calls.clear();
    }

    pub fn stub(&self, contract: &str, function: &str) -> Result<&Stub, LookupError> {
        let stubs = self
            .contracts
            .get(contract)
            .ok_or_else(|| LookupError::UnknownContract {
                contract: contract.to_string(),
            })?;
        stubs
            .get(function)
            .ok_or_else(|| LookupError::UnknownFunction {
                contract: contract.to_string(),
                function: function.to_string(),
            })
    }

    pub fn stub_mut(&mut self, contract: &str, function: &str) -> Result<&mut Stub, LookupError> {
        let stubs = self
            .contracts
            .get_mut(contract)
            .ok_or_else(|| LookupError::UnknownContract {
                contract: contract.to_string(),
            })?;
        stubs
            .get_mut(function)
            .ok_or_else(|| LookupError::UnknownFunction {
                contract: contract.to_string(),
                function: function.to_string(),
            })
    }

    pub(crate) fn stub_mut_or_declared(&mut self, contract: &str, function: &str) -> &mut Stub {
        self.contracts
            .entry(contract.to_string())
            .or_default()
            .entry(function.to_string())
            .or_default()
    }

    pub fn invocations(
        &self,
        contract: &str,
        function: &str,
    ) -> Result<&[Invocation], LookupError> {
        self.stub(contract, function).map(Stub::invocations)
    }

    /// Every dispatched call, in order, across all stubs.
    pub fn calls(&self) -> &[MockCallLogEntry] {
        &self.calls
    }

    pub(crate) fn record_call(
        &mut self,
        contract: &str,
        function: &str,
        args_count: usize,
        returned: Option<&ClarityValue>,
    ) {
        self.calls.push(MockCallLogEntry {
            contract: contract.to_string(),
            function: function.to_string(),
            args_count,
            returned: returned.map(ToString::to_string),
        });
    }

    pub fn set_global(&mut self, name: &str, value: &str) {
        self.globals.insert(name.to_string(), value.to_string());
    }

    pub fn global(&self, name: &str) -> Option<&str> {
        self.globals.get(name).map(String::as_str)
    }

    pub fn tx_sender(&self) -> Option<&str> {
        self.global(TX_SENDER)
    }

    /// Splits `CONTRACT.function=<json>`. The literal `undefined` configures
    /// an absent result.
    fn parse_spec(spec: &str) -> Result<(MockKey, Option<ClarityValue>), MockError> {
        let invalid = |reason: &str| MockError::InvalidSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let (signature, return_raw) = spec
            .split_once('=')
            .ok_or_else(|| invalid("expected CONTRACT.function=return_value"))?;
        let (contract, function) = signature
            .trim()
            .rsplit_once('.')
            .ok_or_else(|| invalid("expected CONTRACT.function before '='"))?;
        let contract = contract.trim();
        let function = function.trim();
        let return_raw = return_raw.trim();
        if contract.is_empty() || function.is_empty() || return_raw.is_empty() {
            return Err(invalid("CONTRACT, function and return_value are required"));
        }

        let value = if return_raw == "undefined" {
            None
        } else {
            Some(ClarityValue::parse_json(return_raw)?)
        };
        Ok((MockKey::new(contract, function), value))
    }
}
