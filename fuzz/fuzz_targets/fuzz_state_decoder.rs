#![no_main]

use arcmaps_planner::{decode_state, MarkerTypeRegistry};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(token) = std::str::from_utf8(data) {
        let registry = MarkerTypeRegistry::with_default_catalog();
        let _ = decode_state(token, &registry);
    }
});
