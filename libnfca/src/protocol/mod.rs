// libnfca/src/protocol/mod.rs

//! ISO14443-A framing at bit granularity: the codec primitives (parity,
//! mirroring, endian swaps, CRC_A/BCC), the bit-counted frame type, and the
//! cascade level 1 commands and replies built on them.

/// CRC_A and BCC
pub mod checksum;
/// Initiator commands
pub mod commands;
/// Byte-order swaps
pub mod endian;
/// Bit-counted frames
pub mod frame;
pub mod mirror;
pub mod parity;
/// Bounds-checked readers
pub mod parser;
/// Target replies
pub mod responses;

pub use checksum::{append_crc_a, bcc, crc_a, crc_a_bytes, verify_bcc, verify_crc_a};
pub use commands::Command;
pub use endian::{read_swapped32, read_swapped64, swap_endian32, swap_endian64};
pub use frame::BitFrame;
pub use mirror::{mirror_byte, mirror_bytes, mirror_u32, mirror_u64};
pub use parity::{odd_parity, parity_bits, parity_mismatches, parity_vec};
pub use responses::Response;
