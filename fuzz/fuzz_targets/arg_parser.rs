#![no_main]

use clarity_harness::utils::ArgumentParser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(json_str) = std::str::from_utf8(data) {
        let _ = ArgumentParser::new().parse_args_string(json_str);
    }
});
