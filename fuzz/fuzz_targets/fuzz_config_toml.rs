#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and spec building must never panic
        if let Ok((config, _unknown)) = fnpilot::config::parse_with_unknown_keys(content) {
            let _ = config.function_spec();
            let _ = config.validate_environments();
            let _ = config.page_size();
        }
    }
});
