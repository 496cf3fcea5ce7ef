// libnfca/src/protocol/responses/mod.rs

use crate::protocol::BitFrame;
use crate::protocol::checksum::{bcc, crc_a};
use crate::protocol::commands::Command;
use crate::constants::{ATQA_REPLY_BITS, SAK_REPLY_BITS, UID_BCC_REPLY_BITS};
use crate::protocol::parser::{byte_at, expect_bits, uid_at};
use crate::types::{Atqa, Sak, Uid};
use crate::{Error, Result};

/// Replies a cascade level 1 target sends during anti-collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Answer to REQA / WUPA, 16 bits
    Atqa(Atqa),
    /// Answer to ANTICOLLISION: UID + BCC, 40 bits
    UidBcc(Uid),
    /// Answer to SELECT: SAK + CRC_A, 24 bits
    Sak(Sak),
}

impl Response {
    /// Encode the reply into the exact frame the target transmits.
    pub fn encode(&self) -> BitFrame {
        match self {
            Self::Atqa(atqa) => BitFrame::from_bytes(atqa.as_bytes()),
            Self::UidBcc(uid) => BitFrame::from_bytes(&uid.with_bcc()),
            Self::Sak(sak) => BitFrame::from_bytes(&sak.with_crc()),
        }
    }

    /// Bit length of the encoded reply.
    pub fn bit_len(&self) -> usize {
        match self {
            Self::Atqa(_) => ATQA_REPLY_BITS,
            Self::UidBcc(_) => UID_BCC_REPLY_BITS,
            Self::Sak(_) => SAK_REPLY_BITS,
        }
    }

    /// Decode the reply to `cmd` as an initiator would, checking BCC and
    /// CRC_A where the reply carries them.
    pub fn decode(cmd: &Command, frame: &BitFrame) -> Result<Self> {
        let data = frame.as_bytes();
        match cmd {
            Command::Reqa | Command::Wupa => {
                expect_bits(frame, ATQA_REPLY_BITS)?;
                Ok(Self::Atqa(Atqa::from_bytes([byte_at(data, 0)?, byte_at(data, 1)?])))
            }
            Command::AntiCollision => {
                expect_bits(frame, UID_BCC_REPLY_BITS)?;
                let uid = uid_at(data, 0)?;
                let expected = bcc(uid.as_bytes());
                let actual = byte_at(data, 4)?;
                if expected != actual {
                    return Err(Error::BccMismatch { expected, actual });
                }
                Ok(Self::UidBcc(uid))
            }
            Command::Select(_) => {
                expect_bits(frame, SAK_REPLY_BITS)?;
                let sak = byte_at(data, 0)?;
                let expected = crc_a(&[sak]);
                let actual = u16::from_le_bytes([byte_at(data, 1)?, byte_at(data, 2)?]);
                if expected != actual {
                    return Err(Error::ChecksumMismatch { expected, actual });
                }
                Ok(Self::Sak(Sak::new(sak)))
            }
        }
    }
}
