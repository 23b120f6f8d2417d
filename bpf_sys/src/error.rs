//! The two-layer error taxonomy for kernel failures
//!
//! Two independent, combinable strategies:
//!
//! 1. **Wrapped errno** ([`SysError::Kernel`]): the errno is hidden behind
//!    the variant and reachable only through [`SysError::errno`], so a
//!    failure can never be accidentally matched against an unrelated
//!    constant that happens to share its bit pattern.
//! 2. **Tagged sentinel** ([`SysError::Tagged`]): pairs a caller-chosen
//!    [`ErrorTag`] — the comparison identity — with the concrete errno kept
//!    for classification. [`SysError::is`] answers true only for the exact
//!    tag supplied at construction, never for another error carrying the
//!    same errno.
//!
//! `SysError` deliberately implements no equality: matching goes through
//! `is()` or `errno()`, by variant and tag identity, never by incidental
//! field equality.

use core::fmt;
use core::ptr;

use bpf_abi::Errno;
use thiserror::Error;

/// An opaque marker whose *address* is a stable comparison identity.
///
/// Tags are declared `static` by the layer that owns the classification and
/// handed around as `&'static ErrorTag`. Two tags with the same name are
/// still different identities.
#[derive(Debug)]
pub struct ErrorTag {
    name: &'static str,
}

impl ErrorTag {
    /// Creates a tag. Meant for `static` items.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Returns the human-readable name used in error messages.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for ErrorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A failed `bpf(2)` call.
#[derive(Debug, Error)]
pub enum SysError {
    /// The kernel rejected the call. Carries the raw errno, unwrapped only
    /// through [`SysError::errno`].
    #[error("kernel rejected the call: {0}")]
    Kernel(Errno),

    /// A kernel failure classified under a stable sentinel tag by a higher
    /// layer. The tag is the comparison identity; the errno stays available
    /// for diagnostics.
    #[error("{tag}: {errno}")]
    Tagged {
        tag: &'static ErrorTag,
        errno: Errno,
    },
}

impl SysError {
    /// Wraps a raw kernel errno.
    pub fn kernel(errno: Errno) -> Self {
        Self::Kernel(errno)
    }

    /// Pairs a sentinel tag with a concrete errno.
    pub fn tagged(tag: &'static ErrorTag, errno: Errno) -> Self {
        Self::Tagged { tag, errno }
    }

    /// Re-tags this error under `tag`, preserving the errno.
    pub fn classify(self, tag: &'static ErrorTag) -> Self {
        Self::Tagged {
            tag,
            errno: self.errno(),
        }
    }

    /// The explicit unwrap: returns the concrete errno of either variant.
    pub fn errno(&self) -> Errno {
        match *self {
            Self::Kernel(errno) => errno,
            Self::Tagged { errno, .. } => errno,
        }
    }

    /// True only for a tagged error built with exactly this tag instance.
    ///
    /// A [`SysError::Kernel`] never matches, and a tagged error never
    /// matches a different tag, even one carrying an equal name or errno.
    pub fn is(&self, tag: &'static ErrorTag) -> bool {
        match *self {
            Self::Kernel(_) => false,
            Self::Tagged { tag: own, .. } => ptr::eq(own, tag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bpf_abi::errno;

    static NOT_FOUND: ErrorTag = ErrorTag::new("object not found");
    static EXHAUSTED: ErrorTag = ErrorTag::new("map capacity exhausted");
    static NOT_FOUND_TWIN: ErrorTag = ErrorTag::new("object not found");

    #[test]
    fn test_tagged_matches_only_its_own_tag() {
        let err = SysError::tagged(&NOT_FOUND, errno::ENOENT);
        assert!(err.is(&NOT_FOUND));
        assert!(!err.is(&EXHAUSTED));
    }

    #[test]
    fn test_same_name_different_identity_does_not_match() {
        let err = SysError::tagged(&NOT_FOUND, errno::ENOENT);
        assert!(!err.is(&NOT_FOUND_TWIN));
    }

    #[test]
    fn test_same_errno_does_not_imply_a_match() {
        let err = SysError::tagged(&NOT_FOUND, errno::ENOENT);
        let other = SysError::tagged(&EXHAUSTED, errno::ENOENT);
        assert!(!other.is(&NOT_FOUND));
        assert_eq!(err.errno(), other.errno());
    }

    #[test]
    fn test_kernel_errors_never_match_a_tag() {
        let err = SysError::kernel(errno::ENOENT);
        assert!(!err.is(&NOT_FOUND));
    }

    #[test]
    fn test_errno_reachable_only_through_explicit_unwrap() {
        let a = SysError::kernel(errno::EINVAL);
        let b = SysError::kernel(errno::EINVAL);
        // No equality is defined on SysError; the only path to the errno is
        // the accessor, and there the two agree.
        assert_eq!(a.errno(), b.errno());
        assert_eq!(a.errno(), errno::EINVAL);
    }

    #[test]
    fn test_classify_preserves_errno() {
        let err = SysError::kernel(errno::ENOENT).classify(&NOT_FOUND);
        assert!(err.is(&NOT_FOUND));
        assert_eq!(err.errno(), errno::ENOENT);
    }

    #[test]
    fn test_display() {
        let err = SysError::kernel(errno::EINVAL);
        assert_eq!(format!("{}", err), "kernel rejected the call: EINVAL (22)");

        let err = SysError::tagged(&NOT_FOUND, errno::ENOENT);
        assert_eq!(format!("{}", err), "object not found: ENOENT (2)");
    }
}
