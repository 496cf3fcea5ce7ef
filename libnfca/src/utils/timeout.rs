//! Timeout helpers used across the crate.
//!
//! The emulator never blocks forever on a receive once it is running: it
//! polls with a bounded timeout so a stop request is noticed between frames.

use std::time::Duration;

/// Default receive poll timeout in milliseconds used by the emulator loop
/// when a caller doesn't provide an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert an optional Duration into the optional millisecond form the
/// transport contract uses. `None` means block until a frame arrives.
pub fn to_timeout_ms(timeout: Option<Duration>) -> Option<u64> {
    timeout.map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}
