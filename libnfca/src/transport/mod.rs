// libnfca/src/transport/mod.rs

/// Scripted transport for tests and demos
pub mod mock;
/// The `BitTransport` contract
pub mod traits;

pub use mock::MockTransport;
pub use traits::{BitTransport, DeviceOption};
