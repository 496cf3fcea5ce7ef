// libnfca/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// No transport was supplied
    #[error("device not found")]
    DeviceNotFound,

    /// Wrong byte count
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required byte count
        expected: usize,
        /// Byte count found
        actual: usize,
    },

    /// Bit count does not fit the buffer
    #[error("invalid bit count: {bits} bits do not fit in {capacity} bytes")]
    InvalidBitCount {
        /// Requested bit count
        bits: usize,
        /// Buffer size in bytes
        capacity: usize,
    },

    /// Unparseable hex string
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// CRC_A does not match the protected bytes
    #[error("crc-a mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch {
        /// CRC_A computed over the data
        expected: u16,
        /// CRC_A carried by the frame
        actual: u16,
    },

    /// BCC does not match the UID
    #[error("bcc mismatch: expected {expected:#04x}, got {actual:#04x}")]
    BccMismatch {
        /// BCC computed from the UID
        expected: u8,
        /// BCC carried by the frame
        actual: u8,
    },

    /// Header byte differs from the expected command
    #[error("unexpected command: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedCommand {
        /// Byte the frame should carry
        expected: u8,
        /// Byte found
        actual: u8,
    },

    /// Malformed framing from the transport
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// No frame within the receive timeout
    #[error("operation timed out")]
    Timeout,

    /// Transport went away
    #[error("device disconnected")]
    Disconnected,

    /// Transport could not send a frame
    #[error("transmit failed: {0}")]
    TransmitFailed(String),
}

impl Error {
    /// Transport-level failures end an emulation session; a timeout only
    /// means no frame arrived within the poll window.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::Timeout)
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
