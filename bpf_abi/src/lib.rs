//! # BPF ABI
//!
//! This crate defines the platform constants for the Linux `bpf(2)`
//! interface: the command enumeration, errno values, syscall numbers and
//! kernel-mandated size limits.
//!
//! ## Philosophy
//!
//! - **Closed by construction**: the command set is a kernel-defined
//!   enumeration, not an open integer space. Adding a command is an explicit
//!   change here, nowhere else.
//! - **Explicit over implicit**: errnos are a distinct type, not bare `i32`,
//!   so call sites say what they mean.
//! - **No behavior**: this crate carries definitions only. Dispatch,
//!   wrapping and retry policy live in `bpf_sys`.
//!
//! ## Key Types
//!
//! - [`Cmd`]: the closed `bpf(2)` command enumeration
//! - [`Errno`]: a raw kernel errno with named constants
//! - [`nr::SYS_BPF`]: the syscall number for the compilation target
//! - [`OBJ_NAME_LEN`]: width of the kernel's object-name slot

pub mod cmd;
pub mod errno;
pub mod nr;

pub use cmd::Cmd;
pub use errno::Errno;

/// Width of the kernel's fixed object-name slot, including the mandatory
/// trailing NUL.
pub const OBJ_NAME_LEN: usize = 16;
