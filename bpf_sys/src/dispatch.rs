//! The dispatcher: trap, masking retry, error wrapping
//!
//! Exactly three values reach the kernel: command, pointer, size. The one
//! piece of policy here is the masking rule: on [`Cmd::ProgLoad`] an
//! `EAGAIN` means the verifier was interrupted by a signal (kernel ~4.20)
//! and the call is retried immediately, without backoff and without a cap.
//! A cap would change observable behavior for legitimately slow verifier
//! passes, so the unbounded retry is kept on purpose. For every other
//! command `EAGAIN` surfaces like any other errno.
//!
//! Argument-buffer liveness across the trap is what Rust's borrows already
//! give us: the typed entry points take `&A` and hold the borrow until the
//! gate returns, so the buffer cannot move or be freed inside the kernel's
//! read window. The raw entry points take a bare pointer and push that
//! obligation to the caller.

use core::ffi::c_void;
use core::mem::size_of;

use bpf_abi::{errno, Cmd};

use crate::attr::SyscallAttr;
use crate::error::SysError;
use crate::fd::Fd;
use crate::gate::KernelGate;
#[cfg(target_os = "linux")]
use crate::gate::NativeGate;

/// Performs one `bpf(2)` call through `gate`, applying the masking rule.
///
/// A null `attr` with zero `size` is valid: some commands carry no argument
/// block at all.
///
/// # Safety
///
/// `attr` must either be null or point to at least `size` bytes that stay
/// valid, unmoved and unmodified by other threads until the call returns.
pub unsafe fn raw_with<G: KernelGate>(
    gate: &G,
    cmd: Cmd,
    attr: *const c_void,
    size: usize,
) -> Result<u64, SysError> {
    loop {
        match gate.invoke(cmd, attr, size) {
            // Interrupted-verifier masking, ProgLoad only.
            Err(e) if cmd == Cmd::ProgLoad && e == errno::EAGAIN => continue,
            Err(e) => return Err(SysError::kernel(e)),
            Ok(value) => return Ok(value),
        }
    }
}

/// Dispatches a typed argument block through `gate`.
///
/// The pointer and size handed to the gate are derived from `attr` right
/// here, at the one defined boundary, and the borrow on `attr` spans the
/// whole trap.
pub fn bpf_with<G: KernelGate, A: SyscallAttr>(gate: &G, attr: &A) -> Result<u64, SysError> {
    let ptr = (attr as *const A).cast::<c_void>();
    unsafe { raw_with(gate, attr.command(), ptr, size_of::<A>()) }
}

/// Dispatches a typed argument block and converts a success into an owned
/// descriptor handle.
///
/// On failure the error propagates unmodified and no handle exists.
pub fn bpf_fd_with<G: KernelGate, A: SyscallAttr>(gate: &G, attr: &A) -> Result<Fd, SysError> {
    let raw = bpf_with(gate, attr)?;
    Ok(Fd::new(raw as i32))
}

/// [`raw_with`] against the real kernel.
///
/// # Safety
///
/// Same contract as [`raw_with`].
#[cfg(target_os = "linux")]
pub unsafe fn raw(cmd: Cmd, attr: *const c_void, size: usize) -> Result<u64, SysError> {
    raw_with(&NativeGate, cmd, attr, size)
}

/// [`bpf_with`] against the real kernel.
#[cfg(target_os = "linux")]
pub fn bpf<A: SyscallAttr>(attr: &A) -> Result<u64, SysError> {
    bpf_with(&NativeGate, attr)
}

/// [`bpf_fd_with`] against the real kernel.
#[cfg(target_os = "linux")]
pub fn bpf_fd<A: SyscallAttr>(attr: &A) -> Result<Fd, SysError> {
    bpf_fd_with(&NativeGate, attr)
}
