//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::Result;
use crate::emulator::{Emulator, EmulatorConfig, Initialized};
use crate::protocol::{BitFrame, Command};
use crate::transport::{BitTransport, DeviceOption, MockTransport};
use crate::types::{TargetIdentity, Uid};

/// Transport wrapper that delegates into a shared MockTransport so a test
/// can inspect what was sent after the Emulator has taken ownership.
#[doc(hidden)]
#[derive(Clone)]
pub struct SharedTransport {
    /// Mock shared with the test
    pub inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    /// Share `mock`.
    pub fn new(mock: MockTransport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(mock)),
        }
    }
}

impl BitTransport for SharedTransport {
    fn receive_bits(&mut self, rx: &mut [u8], timeout_ms: Option<u64>) -> Result<usize> {
        self.inner.borrow_mut().receive_bits(rx, timeout_ms)
    }

    fn transmit_bits(&mut self, tx: &[u8], bits: usize) -> Result<()> {
        self.inner.borrow_mut().transmit_bits(tx, bits)
    }

    fn receive_bits_with_parity(
        &mut self,
        rx: &mut [u8],
        parity: &mut [u8],
        timeout_ms: Option<u64>,
    ) -> Result<usize> {
        self.inner
            .borrow_mut()
            .receive_bits_with_parity(rx, parity, timeout_ms)
    }

    fn transmit_bits_with_parity(&mut self, tx: &[u8], bits: usize, parity: &[u8]) -> Result<()> {
        self.inner
            .borrow_mut()
            .transmit_bits_with_parity(tx, bits, parity)
    }

    fn configure(&mut self, option: DeviceOption, enable: bool) -> Result<()> {
        self.inner.borrow_mut().configure(option, enable)
    }

    fn target_init(
        &mut self,
        identity: &TargetIdentity,
        rx: &mut [u8],
        timeout_ms: Option<u64>,
    ) -> Result<usize> {
        self.inner
            .borrow_mut()
            .target_init(identity, rx, timeout_ms)
    }

    fn name(&self) -> &str {
        "shared mock"
    }
}

/// The frames an initiator sends to select a single-size UID at cascade
/// level 1: REQA, ANTICOLLISION, SELECT.
#[doc(hidden)]
pub fn anticollision_script(uid: Uid) -> Vec<BitFrame> {
    vec![
        Command::Reqa.encode(),
        Command::AntiCollision.encode(),
        Command::Select(uid).encode(),
    ]
}

/// Seed a MockTransport with the frame consumed by `target_init` followed
/// by `frames`.
#[doc(hidden)]
pub fn seed_init_and_frames(mock: &mut MockTransport, frames: Vec<BitFrame>) {
    mock.push_frame(Command::Wupa.encode());
    for f in frames {
        mock.push_frame(f);
    }
}

/// Convenience: create and initialize an Emulator backed by a shared
/// MockTransport pre-seeded with an init frame and `frames`. The returned
/// handle gives access to what the emulator transmitted.
#[doc(hidden)]
pub fn initialized_mock_emulator(
    identity: TargetIdentity,
    config: EmulatorConfig,
    frames: Vec<BitFrame>,
) -> Result<(Emulator<Initialized>, SharedTransport)> {
    let mut mock = MockTransport::new();
    seed_init_and_frames(&mut mock, frames);
    let shared = SharedTransport::new(mock);
    let emulator =
        Emulator::with_config(Box::new(shared.clone()), identity, config).initialize()?;
    Ok((emulator, shared))
}
