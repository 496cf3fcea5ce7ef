// libnfca/src/emulator/config.rs

use crate::utils::DEFAULT_READ_TIMEOUT_MS;

/// Session options for the emulator loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EmulatorConfig {
    /// Let the device generate and check parity. When false, parity bits
    /// are computed in software and received parity is checked.
    pub hardware_parity: bool,
    /// Skip per-frame logging; keeps reply latency down.
    pub quiet: bool,
    /// Receive poll window; the stop flag is checked between polls.
    pub poll_timeout_ms: u64,
    /// Wait for the first initiator command, `None` blocks.
    pub init_timeout_ms: Option<u64>,
    /// Only answer SELECT frames addressed to the emulated UID.
    pub strict_select: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            hardware_parity: true,
            quiet: false,
            poll_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            init_timeout_ms: None,
            strict_select: false,
        }
    }
}
