use super::utils::clarity_value;
use clarity_mock::ClarityValue;
use proptest::prelude::*;

proptest! {
    #[test]
    fn json_rendering_reads_back_as_the_same_value(value in clarity_value()) {
        let rendered = value.to_json();
        let parsed = ClarityValue::from_json(&rendered).unwrap();
        prop_assert_eq!(parsed, value);
    }

    #[test]
    fn argument_parser_never_panics(input in ".{0,64}") {
        let _ = clarity_harness::utils::ArgumentParser::new().parse_args_string(&input);
    }
}
