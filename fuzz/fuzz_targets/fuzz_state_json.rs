#![no_main]

use arcmaps_planner::codec::{decode_json, encode_state, Compression};
use arcmaps_planner::MarkerTypeRegistry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };
    let registry = MarkerTypeRegistry::with_default_catalog();
    if let Ok(decoded) = decode_json(json, &registry) {
        // Alles, was eingelesen wurde, muss sich wieder kodieren lassen
        let _ = encode_state(&decoded.entries, Compression::Gzip);
    }
});
