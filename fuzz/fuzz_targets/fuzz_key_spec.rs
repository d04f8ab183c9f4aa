//! Fuzz target for key chord parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use opentui_textarea::{Error, KeyEvent, Keymap};

fuzz_target!(|data: &[u8]| {
    let Ok(spec) = std::str::from_utf8(data) else {
        return;
    };
    match spec.parse::<KeyEvent>() {
        Ok(event) => {
            // Any parsed event must be dispatchable.
            let _ = Keymap::emacs().lookup(event);
        }
        Err(Error::InvalidKeySpec(echo)) => assert_eq!(echo, spec),
        Err(other) => panic!("unexpected error {other:?}"),
    }
});
