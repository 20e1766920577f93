#![no_main]

use libfuzzer_sys::fuzz_target;
use thumbsketch::document;

fuzz_target!(|data: &[u8]| {
    if let Ok(doc) = std::str::from_utf8(data) {
        // Rewriting a field must never panic and must be idempotent.
        let once = document::set_field(doc, "image", "/img/blog/x-thumbnail.png");
        let twice = document::set_field(&once, "image", "/img/blog/x-thumbnail.png");
        assert_eq!(once, twice);
    }
});
