// libnfca/src/protocol/frame.rs

use std::fmt;

use crate::protocol::parity::parity_vec;
use crate::{Error, Result};

/// A bit-counted ISO14443-A frame: the bytes on the wire plus the exact
/// number of valid bits, which need not be a multiple of 8.
///
/// Bits are stored LSB-first within each byte, the order the radio sends
/// them. Only the first `bit_len()` bits are meaningful; storage is trimmed
/// to the bytes those bits occupy. Parity bits (one `0`/`1` byte per whole
/// data byte) are carried only when parity is handled in software.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitFrame {
    data: Vec<u8>,
    bits: usize,
    parity: Option<Vec<u8>>,
}

impl BitFrame {
    /// Build a frame of `bits` bits from `data`.
    ///
    /// Fails with `InvalidBitCount` when `data` is too short to hold `bits`.
    /// Bytes beyond the last partially used one are dropped.
    pub fn new(mut data: Vec<u8>, bits: usize) -> Result<Self> {
        if bits > data.len() * 8 {
            return Err(Error::InvalidBitCount {
                bits,
                capacity: data.len(),
            });
        }
        data.truncate(bits.div_ceil(8));
        Ok(Self {
            data,
            bits,
            parity: None,
        })
    }

    /// Copy the first `bits` bits out of a staging buffer.
    pub fn from_buffer(buf: &[u8], bits: usize) -> Result<Self> {
        let used = bits.div_ceil(8);
        if used > buf.len() {
            return Err(Error::InvalidBitCount {
                bits,
                capacity: buf.len(),
            });
        }
        Self::new(buf[..used].to_vec(), bits)
    }

    /// Byte-aligned frame covering all of `data`.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            bits: data.len() * 8,
            parity: None,
        }
    }

    /// 7-bit short frame (REQA / WUPA). The unused top bit is cleared.
    pub fn short(command: u8) -> Self {
        Self {
            data: vec![command & 0x7f],
            bits: 7,
            parity: None,
        }
    }

    /// Attach per-byte parity bits. At least one entry per whole byte is
    /// required.
    pub fn with_parity(mut self, parity: Vec<u8>) -> Result<Self> {
        if parity.len() < self.whole_bytes() {
            return Err(Error::InvalidLength {
                expected: self.whole_bytes(),
                actual: parity.len(),
            });
        }
        self.parity = Some(parity);
        Ok(self)
    }

    /// Attach odd parity computed from the frame's whole bytes.
    pub fn with_computed_parity(mut self) -> Self {
        self.parity = Some(parity_vec(&self.data[..self.whole_bytes()]));
        self
    }

    /// Bytes holding the valid bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Exact number of valid bits.
    pub fn bit_len(&self) -> usize {
        self.bits
    }

    /// Number of bytes touched by the valid bits.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Number of complete 8-bit bytes (the ones that carry parity).
    pub fn whole_bytes(&self) -> usize {
        self.bits / 8
    }

    /// Valid bits in the trailing partial byte, 0 when byte-aligned.
    pub fn residual_bits(&self) -> usize {
        self.bits % 8
    }

    /// Per-byte parity bits, when carried.
    pub fn parity(&self) -> Option<&[u8]> {
        self.parity.as_deref()
    }

    /// True for a zero-bit frame.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Consume the frame, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl fmt::Display for BitFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.parity {
            Some(p) => f.write_str(&crate::utils::bits_to_hex_par(&self.data, self.bits, p)),
            None => f.write_str(&crate::utils::bits_to_hex(&self.data, self.bits)),
        }
    }
}
