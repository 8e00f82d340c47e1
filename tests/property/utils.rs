use clarity_mock::{CallEnvelope, ClarityValue, KnownFunction};
use proptest::prelude::*;

pub fn known_function() -> impl Strategy<Value = KnownFunction> {
    (0..KnownFunction::ALL.len()).prop_map(|i| KnownFunction::ALL[i])
}

/// Includes the envelope and annotation key names so records that share
/// their shape are generated too.
fn tuple_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("success".to_string()),
        Just("value".to_string()),
        Just("error".to_string()),
        Just("type".to_string()),
        "[a-z][a-zA-Z]{0,8}",
    ]
}

pub fn clarity_value() -> impl Strategy<Value = ClarityValue> {
    let leaf = prop_oneof![
        any::<bool>().prop_map(ClarityValue::Bool),
        any::<i128>().prop_map(ClarityValue::Int),
        any::<u128>().prop_map(ClarityValue::UInt),
        prop::collection::vec(any::<u8>(), 0..24).prop_map(ClarityValue::Buffer),
        "S[PT][0-9A-Z]{39}".prop_map(ClarityValue::Principal),
        any::<String>().prop_map(ClarityValue::String),
        Just(ClarityValue::none()),
    ];

    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(ClarityValue::some),
            prop::collection::vec(inner.clone(), 0..4).prop_map(ClarityValue::List),
            prop::collection::btree_map(tuple_key(), inner.clone(), 1..4)
                .prop_map(ClarityValue::Tuple),
            (
                any::<bool>(),
                prop::option::of(inner),
                prop::option::of(any::<u32>())
            )
                .prop_map(|(success, value, error)| {
                    ClarityValue::Envelope(CallEnvelope {
                        success,
                        value: value.map(Box::new),
                        error,
                    })
                }),
        ]
    })
}
