// libnfca/src/protocol/parser.rs

use crate::protocol::BitFrame;
use crate::types::Uid;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Parse a 4-byte UID at `start` index with bounds checking.
pub fn uid_at(data: &[u8], start: usize) -> Result<Uid> {
    let s = slice_at(data, start, 4)?;
    Uid::try_from(s)
}

/// Ensure the byte at `idx` equals `expected`. Returns UnexpectedCommand on
/// mismatch.
pub fn expect_byte(data: &[u8], idx: usize, expected: u8) -> Result<()> {
    let actual = byte_at(data, idx)?;
    if actual != expected {
        return Err(Error::UnexpectedCommand { expected, actual });
    }
    Ok(())
}

/// Ensure `frame` is exactly `bits` long. Returns InvalidLength (in bytes)
/// on mismatch.
pub fn expect_bits(frame: &BitFrame, bits: usize) -> Result<()> {
    if frame.bit_len() != bits {
        return Err(Error::InvalidLength {
            expected: bits / 8,
            actual: frame.byte_len(),
        });
    }
    Ok(())
}
