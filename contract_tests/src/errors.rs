//! Error-matching contract tests
//!
//! Higher layers build their error handling on two promises: a wrapped
//! errno never matches anything by accident, and a tagged error matches
//! exactly one sentinel. These tests pin both from outside the crate that
//! implements them.

#[cfg(test)]
mod tests {
    use bpf_abi::errno;
    use bpf_sys::{ErrorTag, SysError};

    static MAP_FULL: ErrorTag = ErrorTag::new("map capacity exhausted");
    static PROG_TOO_LARGE: ErrorTag = ErrorTag::new("program exceeds verifier limits");

    #[test]
    fn test_classification_attaches_a_matchable_identity() {
        let raw = SysError::kernel(errno::E2BIG);
        assert!(!raw.is(&PROG_TOO_LARGE));

        let classified = raw.classify(&PROG_TOO_LARGE);
        assert!(classified.is(&PROG_TOO_LARGE));
        assert!(!classified.is(&MAP_FULL));
        assert_eq!(classified.errno(), errno::E2BIG);
    }

    #[test]
    fn test_shared_errno_is_never_an_identity() {
        let a = SysError::tagged(&MAP_FULL, errno::E2BIG);
        let b = SysError::tagged(&PROG_TOO_LARGE, errno::E2BIG);

        assert!(a.is(&MAP_FULL) && !a.is(&PROG_TOO_LARGE));
        assert!(b.is(&PROG_TOO_LARGE) && !b.is(&MAP_FULL));
        assert_eq!(a.errno(), b.errno());
    }

    #[test]
    fn test_error_messages_stable() {
        assert_eq!(
            format!("{}", SysError::kernel(errno::EACCES)),
            "kernel rejected the call: EACCES (13)"
        );
        assert_eq!(
            format!("{}", SysError::tagged(&MAP_FULL, errno::E2BIG)),
            "map capacity exhausted: E2BIG (7)"
        );
    }

    #[test]
    fn test_sys_error_is_a_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&SysError::kernel(errno::EINVAL));
    }
}
