// libnfca/src/prelude.rs

//! Commonly used types and functions.

pub use crate::emulator::{
    AntiCollisionResponder, Emulator, EmulatorBuilder, EmulatorConfig, FrameKind, Initialized,
    SessionStats, Uninitialized,
};
pub use crate::protocol::{BitFrame, Command, Response};
pub use crate::transport::{BitTransport, DeviceOption};
pub use crate::{Atqa, Error, Result, Sak, TargetIdentity, Uid};

// Re-export the codec primitives and debug helpers for convenience
pub use crate::protocol::{
    append_crc_a, bcc, crc_a, crc_a_bytes, mirror_byte, mirror_bytes, odd_parity, parity_bits,
    swap_endian32, swap_endian64, verify_crc_a,
};
pub use crate::utils::{bits_to_hex, bits_to_hex_par, bytes_to_hex, parse_hex};
