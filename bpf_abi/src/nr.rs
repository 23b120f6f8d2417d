//! Syscall numbers for the compilation target

/// Number of the multiplexed `bpf(2)` syscall on x86_64.
#[cfg(target_arch = "x86_64")]
pub const SYS_BPF: usize = 321;

/// Number of the multiplexed `bpf(2)` syscall on aarch64.
#[cfg(target_arch = "aarch64")]
pub const SYS_BPF: usize = 280;

/// Number of the multiplexed `bpf(2)` syscall on riscv64.
#[cfg(target_arch = "riscv64")]
pub const SYS_BPF: usize = 280;

#[cfg(test)]
mod tests {
    #[cfg(target_arch = "x86_64")]
    #[test]
    fn test_sys_bpf_x86_64() {
        assert_eq!(super::SYS_BPF, 321);
    }
}
