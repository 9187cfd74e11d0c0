#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz provider state file parsing
        let _ = toml::from_str::<fnpilot::infrastructure::ProviderState>(content);
    }
});
