use crate::envelope::CallEnvelope;
use crate::mock::MockRegistry;
use crate::value::ClarityValue;

/// Assertions over the result of a dispatched call.
pub struct EnvelopeAssertions<'a> {
    result: &'a Option<ClarityValue>,
}

impl<'a> EnvelopeAssertions<'a> {
    pub fn new(result: &'a Option<ClarityValue>) -> Self {
        Self { result }
    }

    #[track_caller]
    pub fn envelope(&self) -> &'a CallEnvelope {
        match self.result {
            Some(ClarityValue::Envelope(envelope)) => envelope,
            Some(other) => panic!("expected a call envelope, got {other}"),
            None => panic!("expected a call envelope, got an absent result"),
        }
    }

    #[track_caller]
    pub fn assert_success(&self) -> &Self {
        let envelope = self.envelope();
        assert!(envelope.success, "expected success, got {envelope}");
        self
    }

    #[track_caller]
    pub fn assert_failure(&self) -> &Self {
        let envelope = self.envelope();
        assert!(!envelope.success, "expected failure, got {envelope}");
        self
    }

    #[track_caller]
    pub fn assert_error(&self, code: u32) -> &Self {
        let envelope = self.envelope();
        assert_eq!(envelope.error, Some(code), "unexpected error code in {envelope}");
        self
    }

    #[track_caller]
    pub fn assert_value_eq(&self, expected: &ClarityValue) -> &Self {
        let envelope = self.envelope();
        assert_eq!(envelope.value(), Some(expected), "unexpected value in {envelope}");
        self
    }
}

#[track_caller]
pub fn assert_absent(result: &Option<ClarityValue>) {
    if let Some(value) = result {
        panic!("expected an absent result, got {value}");
    }
}

/// Assertions over the invocation history kept by a registry.
pub struct CallAssertions<'a> {
    registry: &'a MockRegistry,
}

impl<'a> CallAssertions<'a> {
    pub fn new(registry: &'a MockRegistry) -> Self {
        Self { registry }
    }

    #[track_caller]
    pub fn assert_called(&self, contract: &str, function: &str, times: usize) -> &Self {
        let invocations = self
            .registry
            .invocations(contract, function)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            invocations.len(),
            times,
            "{contract}.{function} was called {} time(s), expected {times}",
            invocations.len()
        );
        self
    }

    #[track_caller]
    pub fn assert_last_called_with(
        &self,
        contract: &str,
        function: &str,
        args: &[ClarityValue],
    ) -> &Self {
        let invocations = self
            .registry
            .invocations(contract, function)
            .unwrap_or_else(|e| panic!("{e}"));
        let last = invocations
            .last()
            .unwrap_or_else(|| panic!("{contract}.{function} was never called"));
        assert_eq!(last.args, args, "unexpected arguments to {contract}.{function}");
        self
    }
}
