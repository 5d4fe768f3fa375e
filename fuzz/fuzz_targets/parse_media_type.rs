#![no_main]
use contenttype::parse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 {
        return;
    }

    // Parsing should never panic, only return errors
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse(s);
    }
});
