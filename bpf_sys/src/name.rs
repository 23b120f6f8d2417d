//! Fixed-width kernel object names

use core::fmt;

use bpf_abi::OBJ_NAME_LEN;
use serde::{Deserialize, Serialize};

/// A null-terminated name in the kernel's fixed 16-byte naming slot.
///
/// The encoder copies at most `OBJ_NAME_LEN - 1` bytes and leaves the final
/// byte zero, so the buffer is always null-terminated. Longer names are
/// silently truncated, never rejected, and no charset validation happens
/// here: the kernel enforces its own `A-Za-z0-9_` rule when it cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ObjName([u8; OBJ_NAME_LEN]);

impl ObjName {
    /// Encodes `name`, truncating if it is too long.
    pub fn new(name: &str) -> Self {
        let mut buf = [0u8; OBJ_NAME_LEN];
        let bytes = name.as_bytes();
        let len = bytes.len().min(OBJ_NAME_LEN - 1);
        buf[..len].copy_from_slice(&bytes[..len]);
        Self(buf)
    }

    /// Returns the raw buffer as it crosses the kernel boundary.
    pub const fn as_bytes(&self) -> &[u8; OBJ_NAME_LEN] {
        &self.0
    }
}

impl From<&str> for ObjName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ObjName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let end = self.0.iter().position(|&b| b == 0).unwrap_or(OBJ_NAME_LEN);
        write!(f, "{}", String::from_utf8_lossy(&self.0[..end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_all_zero() {
        assert_eq!(ObjName::new("").as_bytes(), &[0u8; OBJ_NAME_LEN]);
    }

    #[test]
    fn test_name_of_width_minus_one_copied_fully() {
        let name = ObjName::new("exact_15_chars0");
        assert_eq!(&name.as_bytes()[..15], b"exact_15_chars0");
        assert_eq!(name.as_bytes()[15], 0);
    }

    #[test]
    fn test_long_name_truncated_with_trailing_zero() {
        let name = ObjName::new("a_name_much_longer_than_the_slot");
        assert_eq!(&name.as_bytes()[..15], b"a_name_much_lon");
        assert_eq!(name.as_bytes()[15], 0);
    }

    #[test]
    fn test_embedded_nul_copied_verbatim() {
        let name = ObjName::new("ab\0cd");
        assert_eq!(&name.as_bytes()[..5], b"ab\0cd");
        assert_eq!(&name.as_bytes()[5..], &[0u8; 11]);
    }

    #[test]
    fn test_display_stops_at_first_nul() {
        assert_eq!(format!("{}", ObjName::new("ringbuf")), "ringbuf");
        assert_eq!(format!("{}", ObjName::new("ab\0cd")), "ab");
    }
}
