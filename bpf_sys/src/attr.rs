//! The capability each command-specific argument type must satisfy
//!
//! Argument blocks for `bpf(2)` are command-specific arms of one kernel
//! union. A type opts into dispatch by implementing [`SyscallAttr`]; the
//! dispatcher derives pointer-to-self and size-of-self at its single
//! boundary, so an implementor only declares which command it is laid out
//! for. Most arms live with the subsystems that own them; the two below are
//! kept here because the core layer itself exercises them.

use bpf_abi::Cmd;

use crate::name::ObjName;

/// A command-specific argument block, dispatchable through `bpf_with`.
///
/// # Safety
///
/// Implementors must be `#[repr(C)]` and match the kernel's union arm for
/// the command returned by [`command`](Self::command): the kernel reads
/// `size_of::<Self>()` bytes straight through a pointer to the value.
pub unsafe trait SyscallAttr: Sized {
    /// Returns the command this argument block is laid out for.
    fn command(&self) -> Cmd;
}

/// Argument block for [`Cmd::MapCreate`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct MapCreateAttr {
    pub map_type: u32,
    pub key_size: u32,
    pub value_size: u32,
    pub max_entries: u32,
    pub map_flags: u32,
    pub inner_map_fd: u32,
    pub numa_node: u32,
    pub map_name: ObjName,
    pub map_ifindex: u32,
    pub btf_fd: u32,
    pub btf_key_type_id: u32,
    pub btf_value_type_id: u32,
    pub btf_vmlinux_value_type_id: u32,
}

unsafe impl SyscallAttr for MapCreateAttr {
    fn command(&self) -> Cmd {
        Cmd::MapCreate
    }
}

/// Argument block for [`Cmd::ObjGet`].
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjGetAttr {
    /// User pointer to a NUL-terminated pin path.
    pub pathname: u64,
    pub bpf_fd: u32,
    pub file_flags: u32,
}

unsafe impl SyscallAttr for ObjGetAttr {
    fn command(&self) -> Cmd {
        Cmd::ObjGet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[test]
    fn test_map_create_attr_matches_union_arm() {
        // 7 leading u32 fields, the 16-byte name, then 5 trailing u32s.
        assert_eq!(size_of::<MapCreateAttr>(), 64);
    }

    #[test]
    fn test_obj_get_attr_matches_union_arm() {
        assert_eq!(size_of::<ObjGetAttr>(), 16);
    }

    #[test]
    fn test_commands() {
        assert_eq!(MapCreateAttr::default().command(), Cmd::MapCreate);
        assert_eq!(ObjGetAttr::default().command(), Cmd::ObjGet);
    }
}
