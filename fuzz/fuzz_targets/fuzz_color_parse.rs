#![no_main]

use dialogkit_style::Rgba;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(color) = data.parse::<Rgba>() {
        // Display output must always parse back to the same color.
        let printed = color.to_string();
        assert_eq!(printed.parse::<Rgba>(), Ok(color));
    }
});
