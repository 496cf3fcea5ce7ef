// libnfca/src/protocol/mirror.rs

//! Bit mirroring between MSB-first field notation and the LSB-first order
//! the radio transmits in. Every helper reverses bits *within* each byte and
//! leaves byte order untouched.

const fn build_mirror_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).reverse_bits();
        i += 1;
    }
    table
}

/// Bit-reversed value of every byte, evaluated at compile time.
pub const BYTE_MIRROR: [u8; 256] = build_mirror_table();

/// Reverse the bit order of one byte.
pub fn mirror_byte(byte: u8) -> u8 {
    BYTE_MIRROR[byte as usize]
}

/// Mirror every byte of `buf` in place. Applying it twice restores `buf`.
pub fn mirror_bytes(buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = mirror_byte(*b);
    }
}

/// Mirror each of the four bytes of `value`.
pub fn mirror_u32(value: u32) -> u32 {
    let mut bytes = value.to_ne_bytes();
    mirror_bytes(&mut bytes);
    u32::from_ne_bytes(bytes)
}

/// Mirror each of the eight bytes of `value`.
pub fn mirror_u64(value: u64) -> u64 {
    let mut bytes = value.to_ne_bytes();
    mirror_bytes(&mut bytes);
    u64::from_ne_bytes(bytes)
}
