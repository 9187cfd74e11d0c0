#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        let _ = fnpilot::domain::entities::is_valid_function_name(name);
        let _ = fnpilot::Environment::new(name);
        let _ = name.parse::<fnpilot::Runtime>();
    }
});
