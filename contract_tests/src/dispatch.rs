//! Dispatch contract tests
//!
//! These pin the observable trap semantics: the masking rule fires for
//! exactly one command, retries exactly as many times as the kernel asks,
//! and everything else surfaces on the first trap.
