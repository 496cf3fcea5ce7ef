// libnfca/src/emulator/mod.rs

/// Builder for emulator sessions
pub mod builder;
/// Session options
pub mod config;
/// Type-state session driving loop
pub mod handle;
/// Length-keyed reply selection
pub mod responder;

pub use builder::EmulatorBuilder;
pub use config::EmulatorConfig;
pub use handle::{Emulator, Initialized, RxBuffer, SessionStats, Uninitialized};
pub use responder::{AntiCollisionResponder, FrameKind};
