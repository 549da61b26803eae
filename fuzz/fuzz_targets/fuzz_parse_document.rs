#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must either parse or fail with an error, never panic
    if let Ok(xml) = std::str::from_utf8(data) {
        if let Ok(document) = mbfxml::ContourDocument::parse_str(xml) {
            let coordinates = document.coordinates();
            assert_eq!(coordinates.len(), document.point_count());
        }
    }
});
