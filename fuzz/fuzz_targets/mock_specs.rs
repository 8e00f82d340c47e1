#![no_main]

use clarity_mock::MockRegistry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = std::str::from_utf8(data) {
        let _ = MockRegistry::from_specs(&[spec.to_string()]);
    }
});
