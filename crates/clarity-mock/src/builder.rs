use crate::mock::MockRegistry;
use crate::value::ClarityValue;

/// Fluent construction of a fresh registry for one test case.
pub struct MockEnvBuilder {
    mock_registry: MockRegistry,
}

impl Default for MockEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEnvBuilder {
    /// Starts from every known contract function, all unconfigured.
    pub fn new() -> Self {
        Self::from_registry(MockRegistry::with_known_contracts())
    }

    /// Starts from a registry with nothing declared.
    pub fn empty() -> Self {
        Self::from_registry(MockRegistry::new())
    }

    pub fn from_registry(mock_registry: MockRegistry) -> Self {
        Self { mock_registry }
    }

    pub fn with_contract(mut self, contract: &str, functions: &[&str]) -> Self {
        self.mock_registry.declare_contract(contract, functions);
        self
    }

    /// Declares `contract.function` if needed and configures its return value.
    pub fn with_mock_call(
        mut self,
        contract: &str,
        function: &str,
        return_value: ClarityValue,
    ) -> Self {
        self.mock_registry
            .stub_mut_or_declared(contract, function)
            .configure(Some(return_value));
        self
    }

    pub fn with_absent_call(mut self, contract: &str, function: &str) -> Self {
        self.mock_registry
            .stub_mut_or_declared(contract, function)
            .configure(None);
        self
    }

    pub fn with_global(mut self, name: &str, value: &str) -> Self {
        self.mock_registry.set_global(name, value);
        self
    }

    pub fn build(self) -> MockRegistry {
        self.mock_registry
    }
}
