//! Conversions between domain values and wire values.
//!
//! Every conversion here is total: byte sequences copy, and permission kinds
//! fall back to the `Unrecognized` sentinel instead of failing.

use super::permission::PermissionKind;
use super::proto::PermissionType;
use crate::core::bytes::ByteSequence;

/// Copy a byte sequence into a wire byte string.
pub fn to_wire(bytes: &ByteSequence) -> Vec<u8> {
    bytes.as_bytes().to_vec()
}

/// Take ownership of a wire byte string as a byte sequence.
pub fn from_wire(bytes: Vec<u8>) -> ByteSequence {
    ByteSequence::from(bytes)
}

/// Map a domain permission kind to its wire type.
pub fn permission_kind_to_wire(kind: PermissionKind) -> PermissionType {
    match kind {
        PermissionKind::Read => PermissionType::Read,
        PermissionKind::Write => PermissionType::Write,
        PermissionKind::ReadWrite => PermissionType::Readwrite,
        // No wire value exists for it; it goes out as the -1 sentinel.
        PermissionKind::Unrecognized => PermissionType::Unrecognized,
    }
}

/// Map a numeric wire permission type to a domain kind.
pub fn permission_kind_from_wire(perm_type: i32) -> PermissionKind {
    match PermissionType::from_i32(perm_type) {
        PermissionType::Read => PermissionKind::Read,
        PermissionType::Write => PermissionKind::Write,
        PermissionType::Readwrite => PermissionKind::ReadWrite,
        PermissionType::Unrecognized => PermissionKind::Unrecognized,
    }
}
