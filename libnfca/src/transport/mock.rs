// libnfca/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::protocol::BitFrame;
use crate::transport::traits::{BitTransport, DeviceOption};
use crate::types::TargetIdentity;
use crate::{Error, Result};

/// Mock transport for unit tests. It plays back a script of inbound frames
/// (as an initiator would send them) and records every transmitted frame.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Scripted inbound frames; `None` entries produce a receive timeout
    pub inbound: VecDeque<Option<BitFrame>>,
    /// Frames transmitted by the emulator, with parity when it was supplied
    pub sent: Vec<BitFrame>,
    /// Recorded `configure` calls
    pub options: Vec<(DeviceOption, bool)>,
    /// Identities passed to `target_init`
    pub init_identities: Vec<TargetIdentity>,
    /// Testing hook: number of transmit calls that should fail
    pub transmit_failures: usize,
    /// Report a disconnect instead of a timeout once the script is exhausted
    pub disconnect_when_drained: bool,
    /// Raised once the script is exhausted, so a running loop stops
    pub stop_when_drained: Option<Arc<AtomicBool>>,
}

impl MockTransport {
    /// Empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock pre-seeded with `frames`.
    pub fn with_frames<I: IntoIterator<Item = BitFrame>>(frames: I) -> Self {
        let mut m = Self::new();
        for f in frames {
            m.push_frame(f);
        }
        m
    }

    /// Queue an inbound frame.
    pub fn push_frame(&mut self, frame: BitFrame) {
        self.inbound.push_back(Some(frame));
    }

    /// Queue a receive timeout.
    pub fn push_timeout(&mut self) {
        self.inbound.push_back(None);
    }

    /// Set how many subsequent transmit calls should fail (for tests).
    pub fn set_transmit_failures(&mut self, n: usize) {
        self.transmit_failures = n;
    }

    /// Take the most recently transmitted frame.
    pub fn pop_sent(&mut self) -> Option<BitFrame> {
        self.sent.pop()
    }

    fn next_frame(&mut self) -> Result<BitFrame> {
        match self.inbound.pop_front() {
            Some(Some(frame)) => Ok(frame),
            Some(None) => Err(Error::Timeout),
            None => {
                if let Some(flag) = &self.stop_when_drained {
                    flag.store(true, Ordering::SeqCst);
                }
                if self.disconnect_when_drained {
                    Err(Error::Disconnected)
                } else {
                    Err(Error::Timeout)
                }
            }
        }
    }

    fn record_transmit(&mut self, frame: BitFrame) -> Result<()> {
        if self.transmit_failures > 0 {
            self.transmit_failures -= 1;
            return Err(Error::TransmitFailed("mock transmit failure".into()));
        }
        self.sent.push(frame);
        Ok(())
    }
}

fn copy_into(frame: &BitFrame, rx: &mut [u8]) -> Result<usize> {
    let src = frame.as_bytes();
    if src.len() > rx.len() {
        return Err(Error::FrameFormat(format!(
            "{}-byte frame exceeds {}-byte receive buffer",
            src.len(),
            rx.len()
        )));
    }
    rx[..src.len()].copy_from_slice(src);
    Ok(frame.bit_len())
}

impl BitTransport for MockTransport {
    fn receive_bits(&mut self, rx: &mut [u8], _timeout_ms: Option<u64>) -> Result<usize> {
        let frame = self.next_frame()?;
        copy_into(&frame, rx)
    }

    fn receive_bits_with_parity(
        &mut self,
        rx: &mut [u8],
        parity: &mut [u8],
        _timeout_ms: Option<u64>,
    ) -> Result<usize> {
        // Scripted parity (possibly corrupt) wins over computed parity
        let frame = self.next_frame()?;
        let bits = copy_into(&frame, rx)?;
        match frame.parity() {
            Some(p) => {
                let n = p.len().min(parity.len());
                parity[..n].copy_from_slice(&p[..n]);
            }
            None => crate::protocol::parity::parity_bits(&rx[..bits / 8], parity),
        }
        Ok(bits)
    }

    fn transmit_bits(&mut self, tx: &[u8], bits: usize) -> Result<()> {
        let frame = BitFrame::from_buffer(tx, bits)?;
        self.record_transmit(frame)
    }

    fn transmit_bits_with_parity(&mut self, tx: &[u8], bits: usize, parity: &[u8]) -> Result<()> {
        let frame = BitFrame::from_buffer(tx, bits)?.with_parity(parity.to_vec())?;
        self.record_transmit(frame)
    }

    fn configure(&mut self, option: DeviceOption, enable: bool) -> Result<()> {
        self.options.push((option, enable));
        Ok(())
    }

    fn target_init(
        &mut self,
        identity: &TargetIdentity,
        rx: &mut [u8],
        timeout_ms: Option<u64>,
    ) -> Result<usize> {
        self.init_identities.push(*identity);
        self.receive_bits(rx, timeout_ms)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
