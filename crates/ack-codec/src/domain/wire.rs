//! # Wire Primitives
//!
//! Bounds-checked reader and writer for the ack wire format. All integers
//! are big-endian; strings carry a single length byte.
//!
//! ## Ack Wire Format
//!
//! ```text
//! [height:              4 bytes] offset 0-3
//! [chain_id:           32 bytes] offset 4-35
//! [index:               4 bytes] offset 36-39
//! [type:                1 byte ] offset 40
//! [dblock_timestamp:    4 bytes] offset 41-44
//! [coinbase_timestamp:  8 bytes] offset 45-52
//! [affirmation:        32 bytes] offset 53-84
//! [serial_hash:        32 bytes] offset 85-116
//! [signature:          64 bytes] offset 117-180
//! [len:1][source_node_id: len  ] offset 181+
//! [len:1][source_addr:    len  ]
//! ```
//!
//! The signable prefix is the same layout with the signature removed.

use super::errors::{AckError, AckResult};
use shared_types::Hash32;

/// Longest string that fits behind a one-byte length prefix.
pub const MAX_SHORT_STRING_LEN: usize = u8::MAX as usize;

/// Size of the fixed-width portion of an encoded ack.
pub const FIXED_PAYLOAD_LEN: usize = 4 + 32 + 4 + 1 + 4 + 8 + 32 + 32 + 64;

/// Smallest valid encoded ack: fixed portion plus two empty strings.
pub const MIN_PAYLOAD_LEN: usize = FIXED_PAYLOAD_LEN + 2;

/// Largest valid encoded ack: both strings at their 255-byte limit.
pub const MAX_PAYLOAD_LEN: usize = FIXED_PAYLOAD_LEN + 2 + 2 * MAX_SHORT_STRING_LEN;

/// Cursor over an input buffer that never reads past its end.
#[derive(Debug)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    /// Start reading at the head of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Fail unless at least `needed` bytes remain.
    pub fn require(&self, needed: usize) -> AckResult<()> {
        let remaining = self.remaining();
        if remaining < needed {
            return Err(AckError::Truncated { needed, remaining });
        }
        Ok(())
    }

    /// Consume exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> AckResult<&'a [u8]> {
        self.require(len)?;
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> AckResult<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> AckResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u32_be(&mut self) -> AckResult<u32> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_u64_be(&mut self) -> AckResult<u64> {
        Ok(u64::from_be_bytes(self.read_array()?))
    }

    /// Read a canonical 32-byte identifier.
    pub fn read_hash32(&mut self) -> AckResult<Hash32> {
        Ok(Hash32::from_bytes(self.read_array()?))
    }

    /// Read a length-prefixed UTF-8 string.
    pub fn read_short_string(&mut self, field: &'static str) -> AckResult<String> {
        let len = usize::from(self.read_u8()?);
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| AckError::InvalidUtf8 { field })
    }

    /// Fail if any input is left.
    pub fn finish(self) -> AckResult<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(AckError::TrailingBytes(n)),
        }
    }
}

/// Append-only output buffer.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.buf.push(value);
        self
    }

    pub fn put_u32_be(&mut self, value: u32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn put_u64_be(&mut self, value: u64) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Append a length-prefixed string. Strings over 255 bytes are rejected,
    /// never truncated.
    pub fn put_short_string(&mut self, field: &'static str, value: &str) -> AckResult<&mut Self> {
        let len = u8::try_from(value.len()).map_err(|_| AckError::StringTooLong {
            field,
            len: value.len(),
        })?;
        self.buf.push(len);
        self.buf.extend_from_slice(value.as_bytes());
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Check a string against the one-byte length prefix limit.
pub fn check_short_string(field: &'static str, value: &str) -> AckResult<()> {
    if value.len() > MAX_SHORT_STRING_LEN {
        return Err(AckError::StringTooLong {
            field,
            len: value.len(),
        });
    }
    Ok(())
}
