//! # Syscall Contract Tests
//!
//! This crate provides "golden" tests for the `bpf(2)` plumbing so its
//! observable surface doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the kernel contract is written as code
//! - **Testability first**: contract tests fail when the surface changes
//! - **Mechanism not policy**: pin what must be stable, not how to use it
//!
//! ## Structure
//!
//! - [`abi`]: command discriminants, errno values, encodings, struct sizes
//! - [`dispatch`]: trap semantics over scripted gates
//! - [`errors`]: the error-matching contract

pub mod abi;
pub mod dispatch;
pub mod errors;

/// Common test helpers for dispatch contract validation
pub mod test_helpers {
    use bpf_abi::{Cmd, Errno};
    use bpf_sys::KernelGate;
    use core::ffi::c_void;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// A gate that replays a fixed script of trap outcomes and counts the
    /// traps that reached it.
    pub struct ScriptedGate {
        script: RefCell<VecDeque<Result<u64, Errno>>>,
        calls: Cell<usize>,
    }

    impl ScriptedGate {
        /// Creates a gate that answers with `script`, in order.
        pub fn new(script: Vec<Result<u64, Errno>>) -> Self {
            Self {
                script: RefCell::new(script.into()),
                calls: Cell::new(0),
            }
        }

        /// Creates a gate answering `n` EAGAINs followed by `Ok(value)`.
        pub fn eagain_run(n: usize, value: u64) -> Self {
            let mut script = vec![Err(bpf_abi::errno::EAGAIN); n];
            script.push(Ok(value));
            Self::new(script)
        }

        /// Number of traps issued so far.
        pub fn calls(&self) -> usize {
            self.calls.get()
        }
    }

    impl KernelGate for ScriptedGate {
        unsafe fn invoke(
            &self,
            _cmd: Cmd,
            _attr: *const c_void,
            _size: usize,
        ) -> Result<u64, Errno> {
            self.calls.set(self.calls.get() + 1);
            self.script
                .borrow_mut()
                .pop_front()
                .expect("scripted gate exhausted")
        }
    }
}
