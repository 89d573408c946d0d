//! Key-range permissions granted to roles.

use crate::core::bytes::ByteSequence;
use std::fmt;

/// Permission kind for key operations.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionKind {
    /// Read permission (Range, Watch).
    Read,
    /// Write permission (Put, Delete).
    Write,
    /// Read and write permission.
    ReadWrite,
    /// A kind this client does not know about.
    Unrecognized,
}

impl PermissionKind {
    /// Whether this kind allows reads.
    pub fn allows_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Whether this kind allows writes.
    pub fn allows_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

impl fmt::Display for PermissionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "READ"),
            Self::Write => write!(f, "WRITE"),
            Self::ReadWrite => write!(f, "READWRITE"),
            Self::Unrecognized => write!(f, "UNRECOGNIZED"),
        }
    }
}

impl std::str::FromStr for PermissionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "read" => Ok(Self::Read),
            "write" => Ok(Self::Write),
            "readwrite" => Ok(Self::ReadWrite),
            other => Err(format!(
                "unknown permission kind '{}', expected read, write or readwrite",
                other
            )),
        }
    }
}

/// Permission over a key range.
///
/// An empty `range_end` means the single key `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    /// First key of the range.
    pub key: ByteSequence,
    /// Exclusive end of the range.
    pub range_end: ByteSequence,
    /// Granted kind.
    pub kind: PermissionKind,
}

impl Permission {
    /// Create a range permission.
    pub fn new(
        key: impl Into<ByteSequence>,
        range_end: impl Into<ByteSequence>,
        kind: PermissionKind,
    ) -> Self {
        Self {
            key: key.into(),
            range_end: range_end.into(),
            kind,
        }
    }

    /// Create an exact key permission.
    pub fn exact(key: impl Into<ByteSequence>, kind: PermissionKind) -> Self {
        Self::new(key, ByteSequence::empty(), kind)
    }

    /// Create a permission covering every key that starts with `prefix`.
    pub fn prefix(prefix: impl Into<ByteSequence>, kind: PermissionKind) -> Self {
        let prefix = prefix.into();
        let range_end = prefix_range_end(prefix.as_bytes());
        Self::new(prefix, range_end, kind)
    }

    /// Whether this permission covers more than one key.
    pub fn is_range(&self) -> bool {
        !self.range_end.is_empty()
    }

    /// Whether `range_end` is the prefix end of `key`.
    pub fn is_prefix(&self) -> bool {
        self.is_range() && prefix_range_end(self.key.as_bytes()) == self.range_end.as_bytes()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_prefix() {
            write!(
                f,
                "{} [{}, {}) (prefix {})",
                self.kind, self.key, self.range_end, self.key
            )
        } else if self.is_range() {
            write!(
                f,
                "{} [{}, {})",
                self.kind, self.key, self.range_end
            )
        } else {
            write!(f, "{} {}", self.kind, self.key)
        }
    }
}

/// Range end that selects every key with the given prefix.
///
/// Increments the last byte below 0xff and truncates after it. A prefix of
/// only 0xff bytes (or an empty prefix) selects everything, encoded as `\0`.
pub fn prefix_range_end(prefix: &[u8]) -> Vec<u8> {
    let mut end = prefix.to_vec();
    while let Some(last) = end.pop() {
        if last < 0xff {
            end.push(last + 1);
            return end;
        }
    }
    vec![0]
}
