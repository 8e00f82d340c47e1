use super::utils::{clarity_value, known_function};
use clarity_mock::{dispatcher, KnownFunction, LookupError, MockRegistry};
use proptest::prelude::*;

proptest! {
    #[test]
    fn configure_then_call_returns_configured_value(
        function in known_function(),
        value in clarity_value(),
        args in prop::collection::vec(clarity_value(), 0..4),
    ) {
        let mut registry = MockRegistry::with_known_contracts();
        registry.configure(function.contract(), function.function(), value.clone()).unwrap();

        let result =
            dispatcher::call(&mut registry, function.contract(), function.function(), &args)
                .unwrap();

        prop_assert_eq!(result, Some(value));
        let invocations = registry.invocations(function.contract(), function.function()).unwrap();
        prop_assert_eq!(&invocations[0].args, &args);
    }

    #[test]
    fn last_configuration_wins(
        function in known_function(),
        values in prop::collection::vec(clarity_value(), 1..5),
    ) {
        let mut registry = MockRegistry::with_known_contracts();
        for value in &values {
            registry.configure(function.contract(), function.function(), value.clone()).unwrap();
        }

        let result = dispatcher::call_known(&mut registry, function, &[]).unwrap();
        prop_assert_eq!(result.as_ref(), values.last());
    }

    #[test]
    fn reset_discards_every_configured_value(
        configured in prop::collection::vec((known_function(), clarity_value()), 1..8),
    ) {
        let mut registry = MockRegistry::with_known_contracts();
        for (function, value) in &configured {
            registry.configure_known(*function, value.clone());
        }

        registry.reset();

        for function in KnownFunction::ALL {
            prop_assert!(dispatcher::call_known(&mut registry, function, &[]).unwrap().is_none());
        }
    }

    #[test]
    fn unregistered_function_is_a_lookup_error(function in "[a-z]{1,10}(-[a-z]{1,8})?") {
        for contract in KnownFunction::contracts() {
            prop_assume!(KnownFunction::resolve(contract, &function).is_none());
        }
        let mut registry = MockRegistry::with_known_contracts();
        for contract in KnownFunction::contracts() {
            let err = dispatcher::call(&mut registry, contract, &function, &[]).unwrap_err();
            let is_unknown_function = matches!(err, LookupError::UnknownFunction { .. });
            prop_assert!(is_unknown_function);
        }
        prop_assert!(registry.calls().is_empty());
    }
}
