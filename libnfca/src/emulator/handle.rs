// libnfca/src/emulator/handle.rs

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, trace, warn};

use crate::Result;
use crate::constants::MAX_FRAME_LEN;
use crate::emulator::config::EmulatorConfig;
use crate::emulator::responder::{AntiCollisionResponder, FrameKind};
use crate::protocol::BitFrame;
use crate::protocol::parity::{parity_mismatches, parity_vec};
use crate::transport::{BitTransport, DeviceOption};
use crate::types::TargetIdentity;
use crate::utils::{bits_to_hex, bytes_to_hex};

/// Type-state marker: device not yet in target mode
pub struct Uninitialized;
/// Type-state marker: device configured, ready to answer frames
pub struct Initialized;

/// Receive staging area owned by the driving loop: frame bytes plus one
/// parity slot per byte.
pub struct RxBuffer {
    /// Frame bytes
    pub data: [u8; MAX_FRAME_LEN],
    /// One parity bit per whole byte
    pub parity: [u8; MAX_FRAME_LEN],
}

impl RxBuffer {
    /// Zeroed buffers.
    pub fn new() -> Self {
        Self {
            data: [0u8; MAX_FRAME_LEN],
            parity: [0u8; MAX_FRAME_LEN],
        }
    }
}

impl Default for RxBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters for one emulation session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames delivered by the transport
    pub frames_received: u64,
    /// Replies transmitted
    pub replies_sent: u64,
    /// Frames left unanswered
    pub frames_ignored: u64,
    /// Number of REQA/WUPA frames seen
    pub polling_rounds: u64,
}

/// Emulated target bound to a transport. The type parameter tracks whether
/// the device has been taken out of automatic emulation and configured.
pub struct Emulator<State = Uninitialized> {
    transport: Box<dyn BitTransport>,
    responder: AntiCollisionResponder,
    config: EmulatorConfig,
    stats: SessionStats,
    _state: PhantomData<State>,
}

impl<State> Emulator<State> {
    /// Emulated identity.
    pub fn identity(&self) -> &TargetIdentity {
        self.responder.identity()
    }

    /// Reply table in use.
    pub fn responder(&self) -> &AntiCollisionResponder {
        &self.responder
    }

    /// Session options.
    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }
}

impl Emulator<Uninitialized> {
    /// Create an Emulator from an existing transport with default session
    /// options.
    pub fn new_with_transport(transport: Box<dyn BitTransport>, identity: TargetIdentity) -> Self {
        Self::with_config(transport, identity, EmulatorConfig::default())
    }

    /// Create an Emulator with explicit session options.
    pub fn with_config(
        transport: Box<dyn BitTransport>,
        identity: TargetIdentity,
        config: EmulatorConfig,
    ) -> Self {
        let responder = AntiCollisionResponder::new(identity).with_strict_select(config.strict_select);
        Self {
            transport,
            responder,
            config,
            stats: SessionStats::default(),
            _state: PhantomData,
        }
    }

    /// Bring the device into target mode and wait for the first initiator
    /// command, then hand CRC (always) and parity (unless offloaded) over to
    /// the host.
    pub fn initialize(self) -> Result<Emulator<Initialized>> {
        let mut this = self;
        let identity = *this.responder.identity();

        if !identity.fits_cascade_level_1() {
            warn!(
                "ATQA {} / SAK {:#04x} do not describe a complete single-size UID; \
                 initiators may expect cascade levels that are never answered",
                bytes_to_hex(identity.atqa.as_bytes()),
                identity.sak.as_u8()
            );
        }

        let mut rx = [0u8; MAX_FRAME_LEN];
        let bits = this
            .transport
            .target_init(&identity, &mut rx, this.config.init_timeout_ms)?;
        let first = BitFrame::from_buffer(&rx, bits)?;
        info!(
            "{}: received initiator command: {}",
            this.transport.name(),
            first
        );

        // Replies already carry their CRC_A
        this.transport.configure(DeviceOption::HandleCrc, false)?;
        this.transport
            .configure(DeviceOption::HandleParity, this.config.hardware_parity)?;
        info!(
            "emulated tag initialized with UID {} (hardware parity: {})",
            identity.uid, this.config.hardware_parity
        );

        Ok(Emulator {
            transport: this.transport,
            responder: this.responder,
            config: this.config,
            stats: this.stats,
            _state: PhantomData,
        })
    }
}

impl Emulator<Initialized> {
    /// One receive / handle / transmit round. Returns how the inbound frame
    /// was classified. A receive timeout surfaces as `Error::Timeout`.
    pub fn step(&mut self, rx: &mut RxBuffer) -> Result<FrameKind> {
        let inbound = self.receive(rx)?;
        self.stats.frames_received += 1;

        let kind = FrameKind::classify(inbound.bit_len());
        if kind == FrameKind::Request {
            self.stats.polling_rounds += 1;
        }
        if !self.config.quiet {
            if kind == FrameKind::Request {
                debug!("new anti-collision round");
            }
            debug!("R: {}", bits_to_hex(inbound.as_bytes(), inbound.bit_len()));
        }

        match self.responder.handle_frame(&inbound) {
            Some(reply) => {
                self.transmit(&reply)?;
                self.stats.replies_sent += 1;
                if !self.config.quiet {
                    debug!("T: {}", bits_to_hex(reply.as_bytes(), reply.bit_len()));
                }
            }
            None => {
                self.stats.frames_ignored += 1;
                trace!("ignoring {}-bit {} frame", inbound.bit_len(), kind);
            }
        }
        Ok(kind)
    }

    /// Answer frames until `stop` is raised or the transport fails.
    ///
    /// Receive timeouts only restart the poll; any other transport error
    /// ends the session and is returned. Counters stay readable through
    /// [`Emulator::stats`] either way.
    pub fn run(&mut self, stop: &AtomicBool) -> Result<SessionStats> {
        let mut rx = RxBuffer::new();
        info!("{}: emulation started", self.transport.name());

        while !stop.load(Ordering::SeqCst) {
            match self.step(&mut rx) {
                Ok(_) => {}
                Err(e) if !e.is_fatal() => {}
                Err(e) => {
                    warn!("emulation session ended: {}", e);
                    return Err(e);
                }
            }
        }

        info!("emulation stopped: {:?}", self.stats);
        Ok(self.stats)
    }

    /// Counters so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    fn receive(&mut self, rx: &mut RxBuffer) -> Result<BitFrame> {
        let timeout = Some(self.config.poll_timeout_ms);
        if self.config.hardware_parity {
            let bits = self.transport.receive_bits(&mut rx.data, timeout)?;
            return BitFrame::from_buffer(&rx.data, bits);
        }

        let bits = self
            .transport
            .receive_bits_with_parity(&mut rx.data, &mut rx.parity, timeout)?;
        let whole = (bits / 8).min(MAX_FRAME_LEN);
        let frame = BitFrame::from_buffer(&rx.data, bits)?.with_parity(rx.parity[..whole].to_vec())?;

        let bad = parity_mismatches(frame.as_bytes(), bits, &rx.parity[..whole]);
        if !bad.is_empty() {
            warn!("parity error in byte(s) {:?}: {}", bad, frame);
        } else if cfg!(feature = "diagnostics") {
            trace!("R (parity): {}", frame);
        }
        Ok(frame)
    }

    fn transmit(&mut self, reply: &BitFrame) -> Result<()> {
        if self.config.hardware_parity {
            return self.transport.transmit_bits(reply.as_bytes(), reply.bit_len());
        }
        let parity = parity_vec(&reply.as_bytes()[..reply.whole_bytes()]);
        self.transport
            .transmit_bits_with_parity(reply.as_bytes(), reply.bit_len(), &parity)
    }
}
