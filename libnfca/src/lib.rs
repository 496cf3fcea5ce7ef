// libnfca/src/lib.rs

//! libnfca
//!
//! Pure Rust ISO14443-A bit-level codec (odd parity, bit mirroring, endian
//! swaps, CRC_A) and a single-identity anti-collision target emulator that
//! answers REQA/WUPA, ANTICOLLISION and SELECT at cascade level 1.
#![warn(missing_docs)]

/// Protocol constants and defaults
pub mod constants;
/// Target emulation session and responder
pub mod emulator;
/// Crate-wide error type
pub mod error;
/// Convenience re-exports
pub mod prelude;
/// Bit codec, frames, commands and replies
pub mod protocol;
#[doc(hidden)]
pub mod test_support;
/// Radio device abstraction
pub mod transport;
/// Identity newtypes
pub mod types;
/// Rendering and timeout helpers
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
