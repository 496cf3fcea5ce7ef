// libnfca/src/emulator/responder.rs

use derive_more::Display;

use crate::constants::{
    ATQA_REPLY_BITS, REQUEST_FRAME_BITS, SAK_REPLY_BITS, SELECT_ALL_FRAME_BITS,
    SELECT_TAG_FRAME_BITS, UID_BCC_REPLY_BITS,
};
use crate::protocol::commands::decode_select;
use crate::protocol::{BitFrame, Response};
use crate::types::TargetIdentity;

/// Inbound frame classes, told apart purely by bit length.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// REQA / WUPA (7 bits); starts a new polling round
    #[display(fmt = "REQA/WUPA")]
    Request,
    /// ANTICOLLISION cascade level 1, NVB=0x20 (16 bits)
    #[display(fmt = "ANTICOLLISION CL1")]
    SelectAll,
    /// SELECT cascade level 1, NVB=0x70 with CRC_A (72 bits)
    #[display(fmt = "SELECT CL1")]
    SelectTag,
    /// Any other length; never answered
    #[display(fmt = "unknown")]
    Unknown,
}

impl FrameKind {
    /// Kind of an inbound frame of `bits` bits.
    pub fn classify(bits: usize) -> Self {
        match bits {
            REQUEST_FRAME_BITS => Self::Request,
            SELECT_ALL_FRAME_BITS => Self::SelectAll,
            SELECT_TAG_FRAME_BITS => Self::SelectTag,
            _ => Self::Unknown,
        }
    }

    /// Length in bits of the reply to this kind of frame, 0 if none.
    pub fn reply_bits(&self) -> usize {
        match self {
            Self::Request => ATQA_REPLY_BITS,
            Self::SelectAll => UID_BCC_REPLY_BITS,
            Self::SelectTag => SAK_REPLY_BITS,
            Self::Unknown => 0,
        }
    }
}

/// Single-identity ISO14443-A target answering the cascade level 1
/// anti-collision sequence.
///
/// All replies are built once at construction; `handle_frame` is a lookup.
/// The responder holds no per-session state, so one instance can serve any
/// number of sessions.
#[derive(Debug, Clone)]
pub struct AntiCollisionResponder {
    identity: TargetIdentity,
    atqa: BitFrame,
    uid_bcc: BitFrame,
    sak: BitFrame,
    strict_select: bool,
}

impl AntiCollisionResponder {
    /// Precompute the replies for `identity`.
    pub fn new(identity: TargetIdentity) -> Self {
        Self {
            identity,
            atqa: Response::Atqa(identity.atqa).encode(),
            uid_bcc: Response::UidBcc(identity.uid).encode(),
            sak: Response::Sak(identity.sak).encode(),
            strict_select: false,
        }
    }

    /// Only answer 72-bit frames that are a valid SELECT for this UID
    /// (header, BCC and CRC_A checked). Off by default.
    pub fn with_strict_select(mut self, strict: bool) -> Self {
        self.strict_select = strict;
        self
    }

    /// Identity the replies were built from.
    pub fn identity(&self) -> &TargetIdentity {
        &self.identity
    }

    /// Precomputed reply for a frame kind.
    pub fn reply_for(&self, kind: FrameKind) -> Option<&BitFrame> {
        match kind {
            FrameKind::Request => Some(&self.atqa),
            FrameKind::SelectAll => Some(&self.uid_bcc),
            FrameKind::SelectTag => Some(&self.sak),
            FrameKind::Unknown => None,
        }
    }

    /// Select the reply to `inbound`, or `None` when the frame is not
    /// answered. Only the bit length is consulted unless strict select is
    /// enabled.
    pub fn handle_frame(&self, inbound: &BitFrame) -> Option<BitFrame> {
        let kind = FrameKind::classify(inbound.bit_len());
        if kind == FrameKind::SelectTag && self.strict_select && !self.selects_me(inbound) {
            return None;
        }
        self.reply_for(kind).cloned()
    }

    fn selects_me(&self, frame: &BitFrame) -> bool {
        match decode_select(frame) {
            Ok(uid) => uid == self.identity.uid,
            Err(e) => {
                log::trace!("rejecting SELECT: {}", e);
                false
            }
        }
    }
}

impl Default for AntiCollisionResponder {
    fn default() -> Self {
        Self::new(TargetIdentity::default())
    }
}
