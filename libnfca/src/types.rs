// libnfca/src/types.rs

use std::str::FromStr;

use crate::Error;
use crate::constants::{DEFAULT_ATQA, DEFAULT_SAK, DEFAULT_UID};
use crate::protocol::checksum::bcc;

/// UID - Newtype Pattern (4 bytes, single size, cascade level 1 only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 4]);

impl Uid {
    /// Wrap four UID bytes in transmit order.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// UID bytes in transmit order.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Block Check Character: XOR of the four UID bytes
    pub fn bcc(&self) -> u8 {
        bcc(&self.0)
    }

    /// UID followed by its BCC, as sent in reply to ANTICOLLISION
    pub fn with_bcc(&self) -> [u8; 5] {
        let [a, b, c, d] = self.0;
        [a, b, c, d, self.bcc()]
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl Default for Uid {
    fn default() -> Self {
        Self(DEFAULT_UID)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 4] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 4,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl FromStr for Uid {
    type Err = Error;

    /// Parse 8 hex digits, e.g. `"DEADBEAF"` or `"de ad be af"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::InvalidHex)?;
        Self::try_from(bytes.as_slice())
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in &self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// ATQA (2 bytes, transmit order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atqa([u8; 2]);

impl Atqa {
    /// Wrap the two ATQA bytes in transmit order.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// ATQA bytes in transmit order.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// UID size field (bits 7..6 of the first byte). 0 = single size.
    pub fn uid_size_bits(&self) -> u8 {
        (self.0[0] >> 6) & 0x03
    }

    /// True when one of the bit-frame anti-collision bits (b1..b5) is set
    pub fn supports_bit_frame_anticollision(&self) -> bool {
        self.0[0] & 0x1f != 0
    }
}

impl Default for Atqa {
    fn default() -> Self {
        Self(DEFAULT_ATQA)
    }
}

/// SAK (1 byte)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sak(u8);

impl Sak {
    /// Wrap a raw SAK byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw SAK byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Cascade bit (b3): UID not complete, more cascade levels follow
    pub fn uid_incomplete(&self) -> bool {
        self.0 & 0x04 != 0
    }

    /// SAK followed by its CRC-A, as transmitted after SELECT
    pub fn with_crc(&self) -> [u8; 3] {
        let [lo, hi] = crate::protocol::checksum::crc_a_bytes(&[self.0]);
        [self.0, lo, hi]
    }
}

impl Default for Sak {
    fn default() -> Self {
        Self(DEFAULT_SAK)
    }
}

/// Identity of the emulated ISO14443-A target.
///
/// Immutable once handed to a responder; build a new responder to emulate a
/// different identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetIdentity {
    /// Single-size UID answered at cascade level 1
    pub uid: Uid,
    /// Reply to REQA/WUPA
    pub atqa: Atqa,
    /// Reply to SELECT, sent with CRC_A
    pub sak: Sak,
}

impl TargetIdentity {
    /// Identity from its three parts.
    pub fn new(uid: Uid, atqa: Atqa, sak: Sak) -> Self {
        Self { uid, atqa, sak }
    }

    /// Default ATQA/SAK with a UID given as 8 hex digits
    pub fn from_uid_hex(s: &str) -> crate::Result<Self> {
        Ok(Self {
            uid: s.parse()?,
            ..Self::default()
        })
    }

    /// Whether ATQA and SAK describe a complete single-size UID that an
    /// initiator can select with one bit-frame anti-collision round.
    ///
    /// An identity failing this check is still answered, but a reader
    /// trusting the ATQA/SAK will go on to cascade levels this target
    /// never answers.
    pub fn fits_cascade_level_1(&self) -> bool {
        self.atqa.uid_size_bits() == 0
            && self.atqa.supports_bit_frame_anticollision()
            && !self.sak.uid_incomplete()
    }
}
