// libnfca/src/protocol/commands/mod.rs

/// REQA / WUPA short frames
pub mod request;
/// ANTICOLLISION and SELECT at cascade level 1
pub mod select;

pub use request::{decode_short_frame, encode_reqa, encode_wupa};
pub use select::{decode_anticollision, decode_select, encode_anticollision, encode_select};

use crate::constants::{REQUEST_FRAME_BITS, SELECT_ALL_FRAME_BITS, SELECT_TAG_FRAME_BITS};
use crate::protocol::BitFrame;
use crate::types::Uid;
use crate::{Error, Result};

/// Initiator commands of the cascade level 1 anti-collision sequence.
/// Per-command encoders live in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Request, 7-bit short frame `26`
    Reqa,
    /// Wake-up, 7-bit short frame `52`
    Wupa,
    /// `93 20`: every target answers with UID + BCC
    AntiCollision,
    /// `93 70 UID BCC CRC_A`: selects one target
    Select(Uid),
}

impl Command {
    /// Command byte as it appears first on the wire.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Reqa => crate::constants::CMD_REQA,
            Self::Wupa => crate::constants::CMD_WUPA,
            Self::AntiCollision | Self::Select(_) => crate::constants::SEL_CASCADE_LEVEL_1,
        }
    }

    /// Encode the command into a bit-counted frame.
    pub fn encode(&self) -> BitFrame {
        match self {
            Self::Reqa => encode_reqa(),
            Self::Wupa => encode_wupa(),
            Self::AntiCollision => encode_anticollision(),
            Self::Select(uid) => encode_select(*uid),
        }
    }

    /// Fully decode and validate an inbound frame.
    pub fn decode(frame: &BitFrame) -> Result<Self> {
        match frame.bit_len() {
            REQUEST_FRAME_BITS => Ok(if decode_short_frame(frame)? {
                Self::Wupa
            } else {
                Self::Reqa
            }),
            SELECT_ALL_FRAME_BITS => decode_anticollision(frame).map(|_| Self::AntiCollision),
            SELECT_TAG_FRAME_BITS => decode_select(frame).map(Self::Select),
            bits => Err(Error::FrameFormat(format!(
                "no cascade level 1 command is {} bits long",
                bits
            ))),
        }
    }
}
