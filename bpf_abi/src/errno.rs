//! Raw kernel errno values

use core::fmt;
use serde::{Deserialize, Serialize};

/// A numeric error classification returned by a failed kernel call.
///
/// `Errno` is a plain value: two of them compare equal when the numbers
/// match. The guard against accidentally matching a failure result to an
/// unrelated constant lives one layer up, in `bpf_sys`'s error wrappers,
/// which never expose an errno except through an explicit accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Errno(i32);

impl Errno {
    /// Creates an errno from its raw kernel value.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw kernel value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns the conventional symbol for well-known values.
    pub const fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            1 => "EPERM",
            2 => "ENOENT",
            4 => "EINTR",
            5 => "EIO",
            7 => "E2BIG",
            9 => "EBADF",
            11 => "EAGAIN",
            12 => "ENOMEM",
            13 => "EACCES",
            14 => "EFAULT",
            16 => "EBUSY",
            17 => "EEXIST",
            19 => "ENODEV",
            22 => "EINVAL",
            28 => "ENOSPC",
            34 => "ERANGE",
            524 => "ENOTSUPP",
            _ => return None,
        })
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({})", name, self.0),
            None => write!(f, "errno {}", self.0),
        }
    }
}

/// Operation not permitted.
pub const EPERM: Errno = Errno::new(1);
/// No such file or directory.
pub const ENOENT: Errno = Errno::new(2);
/// Interrupted system call.
pub const EINTR: Errno = Errno::new(4);
/// I/O error.
pub const EIO: Errno = Errno::new(5);
/// Argument list too long.
pub const E2BIG: Errno = Errno::new(7);
/// Bad file descriptor.
pub const EBADF: Errno = Errno::new(9);
/// Try again. On `ProgLoad` this can mean the verifier was interrupted by a
/// signal rather than a genuine resource shortage.
pub const EAGAIN: Errno = Errno::new(11);
/// Out of memory.
pub const ENOMEM: Errno = Errno::new(12);
/// Permission denied.
pub const EACCES: Errno = Errno::new(13);
/// Bad address.
pub const EFAULT: Errno = Errno::new(14);
/// Device or resource busy.
pub const EBUSY: Errno = Errno::new(16);
/// Object already exists.
pub const EEXIST: Errno = Errno::new(17);
/// No such device.
pub const ENODEV: Errno = Errno::new(19);
/// Invalid argument.
pub const EINVAL: Errno = Errno::new(22);
/// No space left on device.
pub const ENOSPC: Errno = Errno::new(28);
/// Result out of range.
pub const ERANGE: Errno = Errno::new(34);
/// Operation is not supported. Kernel-internal value that leaks out of some
/// BPF paths instead of the POSIX `EOPNOTSUPP`.
pub const ENOTSUPP: Errno = Errno::new(524);
