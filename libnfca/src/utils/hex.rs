//! Hexadecimal helpers used for debugging and display purposes.
//!
//! Besides plain byte rendering these understand bit-counted frames: a
//! trailing partial byte is rendered without separator, and the parity
//! aware variant marks every byte whose received parity bit is wrong with
//! `!`. None of them have side effects; callers decide where the text goes.

use std::fmt::Write;

use crate::protocol::parity::odd_parity;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Render the first `bits` bits of `data`.
///
/// Whole bytes are followed by two spaces; a trailing partial byte is
/// appended bare since it has no parity slot.
///
/// Example: `(&[0x93, 0x20], 16)` -> `"93  20  "`, `(&[0x26], 7)` -> `"26"`
pub fn bits_to_hex(data: &[u8], bits: usize) -> String {
    let whole = (bits / 8).min(data.len());
    let mut s = String::with_capacity(whole * 4 + 2);
    for b in &data[..whole] {
        let _ = write!(&mut s, "{:02x}  ", b);
    }
    push_residual(&mut s, data, bits);
    s
}

/// Like [`bits_to_hex`], but every whole byte whose entry in `parity`
/// disagrees with its odd parity is marked with `!`. A whole byte with no
/// entry in `parity` is marked too.
///
/// Example: `(&[0x08, 0xb6], 16, &[1, 0])` -> `"08! b6  "`
pub fn bits_to_hex_par(data: &[u8], bits: usize, parity: &[u8]) -> String {
    let whole = (bits / 8).min(data.len());
    let mut s = String::with_capacity(whole * 4 + 2);
    for (i, &b) in data[..whole].iter().enumerate() {
        let bad = parity.get(i).is_none_or(|&p| p != odd_parity(b));
        let _ = write!(&mut s, "{:02x}{}", b, if bad { "! " } else { "  " });
    }
    push_residual(&mut s, data, bits);
    s
}

fn push_residual(s: &mut String, data: &[u8], bits: usize) {
    if bits % 8 != 0 {
        if let Some(b) = data.get(bits / 8) {
            let _ = write!(s, "{:02x}", b);
        }
    }
}

/// Parse a hex string into bytes.
///
/// Accepts strings with or without ASCII whitespace. Returns an error message
/// string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: Vec<u8> = s.bytes().filter(|c| !c.is_ascii_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    cleaned
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
