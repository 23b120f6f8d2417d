//! The trap seam: a trait over the raw kernel entry, plus the native backend
//!
//! This mirrors the layering used elsewhere in the system: the dispatcher is
//! written against [`KernelGate`], and multiple implementations are
//! possible — the real syscall, or a scripted gate for tests.

use core::ffi::c_void;

use bpf_abi::{Cmd, Errno};

/// The raw kernel entry for one `bpf(2)` trap.
///
/// Implementations are stateless from the caller's point of view: `invoke`
/// takes `&self` and may be called concurrently from any number of threads.
/// The kernel provides whatever serialization it needs.
pub trait KernelGate {
    /// Issues one trap with exactly the three values given.
    ///
    /// # Safety
    ///
    /// `attr` must either be null (with `size` zero) or point to at least
    /// `size` bytes that stay valid, unmoved and unmodified by other threads
    /// until this call returns. The kernel reads through the pointer for the
    /// whole duration of the trap.
    unsafe fn invoke(&self, cmd: Cmd, attr: *const c_void, size: usize) -> Result<u64, Errno>;
}

/// Splits a raw syscall return into the success value or the errno.
///
/// Linux signals failure by returning a value in `[-4095, -1]`; everything
/// else is a success value, including large positive results that would be
/// negative if misread as signed.
pub fn decode_raw_return(ret: isize) -> Result<u64, Errno> {
    if (-4095..0).contains(&ret) {
        Err(Errno::new(-ret as i32))
    } else {
        Ok(ret as u64)
    }
}

/// The production gate: issues the real `SYS_BPF` trap.
#[cfg(target_os = "linux")]
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeGate;

#[cfg(target_os = "linux")]
impl KernelGate for NativeGate {
    unsafe fn invoke(&self, cmd: Cmd, attr: *const c_void, size: usize) -> Result<u64, Errno> {
        decode_raw_return(native::trap(cmd.id(), attr, size))
    }
}

#[cfg(target_os = "linux")]
mod native {
    use core::arch::asm;
    use core::ffi::c_void;

    use bpf_abi::nr::SYS_BPF;

    #[cfg(target_arch = "x86_64")]
    pub(super) unsafe fn trap(cmd: u32, attr: *const c_void, size: usize) -> isize {
        let ret: isize;
        asm!(
            "syscall",
            inlateout("rax") SYS_BPF as isize => ret,
            in("rdi") cmd as usize,
            in("rsi") attr,
            in("rdx") size,
            lateout("rcx") _,
            lateout("r11") _,
            options(nostack),
        );
        ret
    }

    #[cfg(target_arch = "aarch64")]
    pub(super) unsafe fn trap(cmd: u32, attr: *const c_void, size: usize) -> isize {
        let ret: isize;
        asm!(
            "svc 0",
            in("x8") SYS_BPF,
            inlateout("x0") cmd as isize => ret,
            in("x1") attr,
            in("x2") size,
            options(nostack),
        );
        ret
    }
}
