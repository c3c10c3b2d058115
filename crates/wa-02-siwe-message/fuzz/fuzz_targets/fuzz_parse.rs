//! Fuzz target for the EIP-4361 parser.
//!
//! ## Running
//!
//! ```bash
//! cd crates/wa-02-siwe-message
//! cargo +nightly fuzz run fuzz_parse
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use wa_02_siwe_message::{parse, parse_canonical};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that parses must render to text that parses back identically
    if let Ok(message) = parse(text) {
        let canonical = message.to_canonical_string();
        assert_eq!(parse(&canonical).as_ref(), Ok(&message));
        assert_eq!(parse_canonical(&canonical).as_ref(), Ok(&message));
    }

    // Canonical acceptance implies exact re-rendering
    if let Ok(message) = parse_canonical(text) {
        assert_eq!(message.to_canonical_string(), text);
    }
});
