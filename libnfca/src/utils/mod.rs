//! Utilities for libnfca: small, reusable helpers used across the crate.
//!
//! Frame rendering for logs (hex, bit-count and parity aware) and timeout
//! conversion.

/// Hex rendering and parsing
pub mod hex;
/// Timeout conversion
pub mod timeout;

// Re-export the most common helpers at the `utils` module level so callers can
// use `crate::utils::bits_to_hex(...)` etc if they prefer.
pub use hex::*;
pub use timeout::*;
