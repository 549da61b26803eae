#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    // Any successfully decoded color has normalized channels
    if let Ok(rgb) = mbfxml::color::hex_to_rgb(input) {
        assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
    }
});
