// libnfca/src/transport/traits.rs

use crate::Result;
use crate::protocol::parity::parity_bits;
use crate::types::TargetIdentity;

/// Framing work a device may take over from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceOption {
    /// Device appends CRC_A on transmit and strips/checks it on receive
    HandleCrc,
    /// Device generates and checks the per-byte parity bits
    HandleParity,
}

/// BitTransport abstracts the radio device away from the emulator loop.
///
/// Every frame is a caller-owned buffer plus an exact bit count. Receive
/// calls block until a frame arrives or `timeout_ms` elapses (`None` blocks
/// indefinitely) and fail with `Error::Timeout` in the latter case.
pub trait BitTransport {
    /// Receive one frame into `rx`, returning its length in bits.
    fn receive_bits(&mut self, rx: &mut [u8], timeout_ms: Option<u64>) -> Result<usize>;

    /// Transmit the first `bits` bits of `tx`.
    fn transmit_bits(&mut self, tx: &[u8], bits: usize) -> Result<()>;

    /// Receive one frame together with its per-byte parity bits. The default
    /// implementation assumes the device already checked parity and fills
    /// `parity` with the computed odd parity of every whole byte.
    ///
    /// # Panics
    ///
    /// Panics if `parity` is shorter than the number of whole bytes received.
    fn receive_bits_with_parity(
        &mut self,
        rx: &mut [u8],
        parity: &mut [u8],
        timeout_ms: Option<u64>,
    ) -> Result<usize> {
        let bits = self.receive_bits(rx, timeout_ms)?;
        let whole = (bits / 8).min(rx.len());
        parity_bits(&rx[..whole], parity);
        Ok(bits)
    }

    /// Transmit a frame with explicit parity bits. Default falls back to
    /// `transmit_bits` for devices that always generate parity themselves.
    fn transmit_bits_with_parity(&mut self, tx: &[u8], bits: usize, _parity: &[u8]) -> Result<()> {
        self.transmit_bits(tx, bits)
    }

    /// Toggle a device-side framing option. Default is a no-op for devices
    /// without configurable framing.
    fn configure(&mut self, _option: DeviceOption, _enable: bool) -> Result<()> {
        Ok(())
    }

    /// Put the device into passive target mode and return the first
    /// initiator command it receives. Devices that start in target mode
    /// simply receive.
    fn target_init(
        &mut self,
        _identity: &TargetIdentity,
        rx: &mut [u8],
        timeout_ms: Option<u64>,
    ) -> Result<usize> {
        self.receive_bits(rx, timeout_ms)
    }

    /// Human-readable device name used in logs.
    fn name(&self) -> &str {
        "unknown device"
    }
}
