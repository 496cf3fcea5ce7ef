// libnfca/src/protocol/checksum.rs

use crate::constants::CRC_A_SEED;

/// Compute the ISO14443-A CRC (CRC_A) over `data`.
///
/// Reflected CRC-16 with polynomial 0x8408, seed 0x6363 and no final XOR.
/// The low byte is transmitted first; see [`crc_a_bytes`]. An empty input
/// returns the seed.
pub fn crc_a(data: &[u8]) -> u16 {
    data.iter().fold(CRC_A_SEED, |crc, &byte| {
        // Byte-wise form of the 0x8408 shift register
        let mut bt = byte ^ (crc & 0x00ff) as u8;
        bt ^= bt << 4;
        let bt = bt as u16;
        (crc >> 8) ^ (bt << 8) ^ (bt << 3) ^ (bt >> 4)
    })
}

/// CRC_A of `data` in transmit order: `[low, high]`
pub fn crc_a_bytes(data: &[u8]) -> [u8; 2] {
    crc_a(data).to_le_bytes()
}

/// Append CRC_A of the current contents to `buf`
pub fn append_crc_a(buf: &mut Vec<u8>) {
    let crc = crc_a_bytes(buf);
    buf.extend_from_slice(&crc);
}

/// Check that the last two bytes of `block` are the CRC_A of the bytes
/// before them. Blocks shorter than the CRC itself never verify.
pub fn verify_crc_a(block: &[u8]) -> bool {
    match block.len().checked_sub(2) {
        Some(split) => {
            let (data, crc) = block.split_at(split);
            crc_a_bytes(data) == [crc[0], crc[1]]
        }
        None => false,
    }
}

/// Block Check Character: XOR of all bytes
pub fn bcc(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Check that the last byte of `block` is the BCC of the bytes before it
pub fn verify_bcc(block: &[u8]) -> bool {
    match block.split_last() {
        Some((&check, data)) => bcc(data) == check,
        None => false,
    }
}
