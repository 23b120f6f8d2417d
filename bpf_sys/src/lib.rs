//! # BPF Sys
//!
//! The single choke point for the Linux `bpf(2)` multiplexed syscall. Every
//! interaction with the BPF subsystem funnels through the dispatcher in this
//! crate, which issues the trap, masks the one kernel condition that must
//! never surface as an error, and wraps every other failure in a
//! two-layer error taxonomy.
//!
//! ## Philosophy
//!
//! - **One boundary**: command-specific argument types plug in through
//!   [`SyscallAttr`]; nothing else reaches the trap.
//! - **Testability first**: the trap itself sits behind [`KernelGate`], so
//!   every dispatch rule is exercised against scripted gates under
//!   `cargo test`, on any host.
//! - **Errors are values**: kernel failures come back as [`SysError`], never
//!   as a panic, and never as a bare errno that could be compared to the
//!   wrong constant.
//!
//! ## Key Types
//!
//! - [`KernelGate`] / [`NativeGate`]: the trap seam and its real backend
//! - [`SyscallAttr`]: the capability each argument type must satisfy
//! - [`SysError`] / [`ErrorTag`]: wrapped-errno and tagged-sentinel errors
//! - [`ObjName`]: the fixed-width, null-padded kernel object name
//! - [`Fd`]: an owned descriptor returned by a successful call

pub mod attr;
pub mod dispatch;
pub mod error;
pub mod fd;
pub mod gate;
pub mod name;

pub use attr::{MapCreateAttr, ObjGetAttr, SyscallAttr};
pub use dispatch::{bpf_fd_with, bpf_with, raw_with};
#[cfg(target_os = "linux")]
pub use dispatch::{bpf, bpf_fd, raw};
pub use error::{ErrorTag, SysError};
pub use fd::Fd;
pub use gate::KernelGate;
#[cfg(target_os = "linux")]
pub use gate::NativeGate;
pub use name::ObjName;
