//! Fuzz target for the vector list parser.
//!
//! Arbitrary text must either parse or produce a positioned error, never
//! panic.

#![no_main]

use disasm816::VectorList;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match VectorList::parse(text, "fuzz") {
        Ok(vectors) => {
            for vector in &vectors {
                assert!(vector.address.linear() <= 0xFF_FFFF);
                assert_eq!(vector.data_bank, vector.address.bank());
            }
        }
        Err(err) => {
            assert!(err.line >= 1);
            assert!((1..=5).contains(&err.column));
        }
    }
});
