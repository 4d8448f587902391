#![no_main]

use libfuzzer_sys::fuzz_target;

use distill::extractor::extract;
use distill::keywords::weigh;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 arrives as replacement characters, like a lossy decode
    let markup = String::from_utf8_lossy(data);

    // Neither stage may panic, and weights must stay normalized
    let text = extract(&markup);
    for tw in weigh(&text, 25) {
        assert!(tw.weight > 0.0 && tw.weight <= 1.0);
    }
});
