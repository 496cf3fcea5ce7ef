// libnfca/src/protocol/endian.rs

/// Reverse the byte order of a 32-bit value
pub fn swap_endian32(value: u32) -> u32 {
    value.swap_bytes()
}

/// Reverse the byte order of a 64-bit value
pub fn swap_endian64(value: u64) -> u64 {
    value.swap_bytes()
}

/// Read a native-order u32 from `bytes` and reverse its byte order
pub fn read_swapped32(bytes: &[u8; 4]) -> u32 {
    swap_endian32(u32::from_ne_bytes(*bytes))
}

/// Read a native-order u64 from `bytes` and reverse its byte order
pub fn read_swapped64(bytes: &[u8; 8]) -> u64 {
    swap_endian64(u64::from_ne_bytes(*bytes))
}
