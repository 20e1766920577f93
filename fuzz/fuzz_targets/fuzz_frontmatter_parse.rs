#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = std::str::from_utf8(data) {
        // Parsing must never panic, and the body is always a literal suffix
        // of the input document.
        let (_, body) = thumbsketch::document::parse(doc);
        assert!(doc.ends_with(body));
    }
});
