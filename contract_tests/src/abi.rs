//! ABI contract tests
//!
//! These pin the constants and layouts shared with the kernel. A failure
//! here means user space and kernel no longer agree on the wire format,
//! which no amount of dispatch logic can repair.
