// libnfca/src/protocol/commands/select.rs

use crate::constants::{
    NVB_SELECT_ALL, NVB_SELECT_TAG, SEL_CASCADE_LEVEL_1, SELECT_ALL_FRAME_BITS,
    SELECT_TAG_FRAME_BITS,
};
use crate::protocol::BitFrame;
use crate::protocol::checksum::{append_crc_a, bcc, crc_a};
use crate::protocol::parser::{byte_at, expect_bits, expect_byte, slice_at, uid_at};
use crate::types::Uid;
use crate::{Error, Result};

/// Encode ANTICOLLISION at cascade level 1: `93 20`
pub fn encode_anticollision() -> BitFrame {
    BitFrame::from_bytes(&[SEL_CASCADE_LEVEL_1, NVB_SELECT_ALL])
}

/// Encode SELECT at cascade level 1: `93 70 UID BCC CRC_A`
pub fn encode_select(uid: Uid) -> BitFrame {
    let mut buf = Vec::with_capacity(9);
    buf.push(SEL_CASCADE_LEVEL_1);
    buf.push(NVB_SELECT_TAG);
    buf.extend_from_slice(&uid.with_bcc());
    append_crc_a(&mut buf);
    BitFrame::from_bytes(&buf)
}

/// Check that `frame` is a cascade level 1 ANTICOLLISION command.
pub fn decode_anticollision(frame: &BitFrame) -> Result<()> {
    expect_bits(frame, SELECT_ALL_FRAME_BITS)?;
    let data = frame.as_bytes();
    expect_byte(data, 0, SEL_CASCADE_LEVEL_1)?;
    expect_byte(data, 1, NVB_SELECT_ALL)
}

/// Validate a cascade level 1 SELECT and return the UID it addresses.
///
/// Header, BCC and CRC_A are all checked.
pub fn decode_select(frame: &BitFrame) -> Result<Uid> {
    expect_bits(frame, SELECT_TAG_FRAME_BITS)?;
    let data = frame.as_bytes();
    expect_byte(data, 0, SEL_CASCADE_LEVEL_1)?;
    expect_byte(data, 1, NVB_SELECT_TAG)?;

    let protected = slice_at(data, 0, 7)?;
    let expected_crc = crc_a(protected);
    let actual_crc = u16::from_le_bytes([byte_at(data, 7)?, byte_at(data, 8)?]);
    if expected_crc != actual_crc {
        return Err(Error::ChecksumMismatch {
            expected: expected_crc,
            actual: actual_crc,
        });
    }

    let uid = uid_at(data, 2)?;
    let expected_bcc = bcc(uid.as_bytes());
    let actual_bcc = byte_at(data, 6)?;
    if expected_bcc != actual_bcc {
        return Err(Error::BccMismatch {
            expected: expected_bcc,
            actual: actual_bcc,
        });
    }
    Ok(uid)
}
