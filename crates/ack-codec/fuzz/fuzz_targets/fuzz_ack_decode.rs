//! Fuzz target for ack decoding.
//!
//! Feeds arbitrary bytes to the decoder. Decoding must never panic, and
//! anything it accepts must re-encode to the exact input.
//!
//! ## Running
//!
//! ```bash
//! cd crates/ack-codec
//! cargo +nightly fuzz run fuzz_ack_decode
//! ```

#![no_main]

use ack_codec::{AckMessage, PROTOCOL_VERSION};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(ack) = AckMessage::decode(data, PROTOCOL_VERSION) {
        let encoded = ack
            .encode(PROTOCOL_VERSION)
            .expect("decoded ack must re-encode");
        assert_eq!(encoded.as_slice(), data);
        assert_eq!(ack.encoded_len(), data.len());
    }
});
