// libnfca/src/emulator/builder.rs

use std::time::Duration;

use crate::emulator::config::EmulatorConfig;
use crate::emulator::handle::{Emulator, Uninitialized};
use crate::transport::BitTransport;
use crate::types::{TargetIdentity, Uid};
use crate::{Error, Result};

/// Helper to construct an Emulator with optional configuration.
#[derive(Default)]
pub struct EmulatorBuilder {
    transport: Option<Box<dyn BitTransport>>,
    identity: TargetIdentity,
    config: EmulatorConfig,
}

impl EmulatorBuilder {
    /// Builder with the default identity and options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn BitTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Emulate `identity`.
    pub fn with_identity(mut self, identity: TargetIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Keep ATQA and SAK, replace the UID
    pub fn with_uid(mut self, uid: Uid) -> Self {
        self.identity.uid = uid;
        self
    }

    /// Replace all session options.
    pub fn with_config(mut self, config: EmulatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Suppress per-frame logging.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.config.quiet = quiet;
        self
    }

    /// Let the device handle parity.
    pub fn hardware_parity(mut self, enabled: bool) -> Self {
        self.config.hardware_parity = enabled;
        self
    }

    /// Only answer SELECT frames addressed to this UID.
    pub fn strict_select(mut self, strict: bool) -> Self {
        self.config.strict_select = strict;
        self
    }

    /// Receive poll window of the run loop.
    pub fn poll_timeout(mut self, timeout: Duration) -> Self {
        self.config.poll_timeout_ms =
            crate::utils::to_timeout_ms(Some(timeout)).unwrap_or(self.config.poll_timeout_ms);
        self
    }

    /// How long to wait for the first initiator command; `None` blocks.
    pub fn init_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.init_timeout_ms = crate::utils::to_timeout_ms(timeout);
        self
    }

    /// Consume the builder and return an uninitialized Emulator.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Emulator<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Emulator::with_config(t, self.identity, self.config)),
            None => Err(Error::DeviceNotFound),
        }
    }
}
