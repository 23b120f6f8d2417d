//! Owned descriptor handles

use core::fmt;

/// An owned descriptor returned by a successful `bpf(2)` call.
///
/// Constructing an `Fd` transfers exclusive ownership of the raw integer:
/// the type is deliberately not `Clone`, and no other code path may treat
/// the same integer as a live descriptor afterwards. The handle's lifecycle
/// beyond construction — dup, pinning, close — belongs to the layer that
/// receives it, which takes the integer back through
/// [`into_raw`](Fd::into_raw).
#[derive(Debug)]
pub struct Fd {
    raw: i32,
}

impl Fd {
    /// Takes ownership of a descriptor the kernel just returned.
    pub fn new(raw: i32) -> Self {
        Self { raw }
    }

    /// Returns the raw descriptor without giving up ownership.
    pub fn as_raw(&self) -> i32 {
        self.raw
    }

    /// Surrenders ownership of the raw descriptor to the caller.
    pub fn into_raw(self) -> i32 {
        self.raw
    }
}

impl fmt::Display for Fd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fd({})", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fd_round_trip() {
        let fd = Fd::new(7);
        assert_eq!(fd.as_raw(), 7);
        assert_eq!(fd.into_raw(), 7);
    }

    #[test]
    fn test_fd_display() {
        assert_eq!(format!("{}", Fd::new(3)), "Fd(3)");
    }
}
