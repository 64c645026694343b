//! Fuzz target for YAML decoding.
//!
//! Goal: `is_valid` and `unmarshal` should **never panic** on any input.
//! `unmarshal` may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_yaml_unmarshal
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Builtin arguments are strings, so only UTF-8 reaches the codec
    if let Ok(text) = std::str::from_utf8(data) {
        let valid = rego_sdk_yaml::is_valid(text);

        // A document is_valid accepts never decodes to null
        if let Ok(value) = rego_sdk_yaml::unmarshal(text)
            && valid
        {
            assert_ne!(value, rego_sdk_types::Value::Null);
        }
    }
});
