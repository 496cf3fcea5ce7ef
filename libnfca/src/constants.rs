// libnfca/src/constants.rs
//! Common ISO14443-A constants used across the crate

/// Size of the receive staging buffer handed to transports
pub const MAX_FRAME_LEN: usize = 264;

/// CRC-A initial value mandated by ISO14443-A
pub const CRC_A_SEED: u16 = 0x6363;

/// CRC-A polynomial x^16 + x^12 + x^5 + 1 in reflected form
pub const CRC_A_POLY_REFLECTED: u16 = 0x8408;

/// REQA / WUPA short frames carry 7 bits
pub const REQUEST_FRAME_BITS: usize = 7;

/// ANTICOLLISION CL1 (`93 20`) carries 2 full bytes
pub const SELECT_ALL_FRAME_BITS: usize = 16;

/// SELECT CL1 (`93 70` + UID + BCC + CRC_A) carries 9 full bytes
pub const SELECT_TAG_FRAME_BITS: usize = 72;

/// ATQA reply to REQA / WUPA
pub const ATQA_REPLY_BITS: usize = 16;

/// UID + BCC reply to ANTICOLLISION
pub const UID_BCC_REPLY_BITS: usize = 40;

/// SAK + CRC_A reply to SELECT
pub const SAK_REPLY_BITS: usize = 24;

/// REQA short frame command code
pub const CMD_REQA: u8 = 0x26;
/// WUPA short frame command code
pub const CMD_WUPA: u8 = 0x52;

/// Cascade level 1 select code
pub const SEL_CASCADE_LEVEL_1: u8 = 0x93;

/// NVB of ANTICOLLISION: only the two header bytes are valid
pub const NVB_SELECT_ALL: u8 = 0x20;
/// NVB of SELECT: header plus the full 40 UID/BCC bits
pub const NVB_SELECT_TAG: u8 = 0x70;

/// Default emulated UID (4 bytes, single size)
pub const DEFAULT_UID: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xAF];

/// ATQA advertising bit-frame anti-collision with a single size UID
pub const DEFAULT_ATQA: [u8; 2] = [0x04, 0x00];

/// SAK for a MIFARE Classic 1K style target with a complete UID
pub const DEFAULT_SAK: u8 = 0x08;
