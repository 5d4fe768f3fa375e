#![no_main]
use contenttype::{format, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1024 {
        return;
    }

    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // The canonical form must be a fixed point: parsing it back yields the
    // same value and the same string. Formatting may still reject a parsed
    // value whose quoted-pairs decoded to DEL (the quoted-pair class is one
    // character wider than the quotable class).
    if let Ok(media_type) = parse(s) {
        let Ok(canonical) = format(&media_type) else {
            return;
        };
        let reparsed = parse(&canonical).expect("canonical form must parse");
        assert_eq!(reparsed, media_type);
        assert_eq!(format(&reparsed).expect("reformat"), canonical);
    }
});
