//! Opaque byte sequences used for names, passwords and key ranges.

use bytes::Bytes;
use std::fmt;

/// Immutable, cheaply clonable byte sequence.
///
/// Used for user names, role names, passwords and permission key ranges.
/// The empty sequence is a valid value.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteSequence(Bytes);

impl ByteSequence {
    /// Create an empty byte sequence.
    pub const fn empty() -> Self {
        Self(Bytes::new())
    }

    /// Borrow the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Interpret the bytes as UTF-8, if they are.
    pub fn to_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    /// Lossy UTF-8 rendering for display and logging.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_str() {
            Some(s) => write!(f, "ByteSequence({:?})", s),
            None => write!(f, "ByteSequence({:?})", self.0),
        }
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl AsRef<[u8]> for ByteSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Bytes> for ByteSequence {
    fn from(bytes: Bytes) -> Self {
        Self(bytes)
    }
}

impl From<Vec<u8>> for ByteSequence {
    fn from(bytes: Vec<u8>) -> Self {
        Self(Bytes::from(bytes))
    }
}

impl From<&[u8]> for ByteSequence {
    fn from(bytes: &[u8]) -> Self {
        Self(Bytes::copy_from_slice(bytes))
    }
}

impl From<String> for ByteSequence {
    fn from(s: String) -> Self {
        Self(Bytes::from(s))
    }
}

impl From<&str> for ByteSequence {
    fn from(s: &str) -> Self {
        Self(Bytes::copy_from_slice(s.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_valid() {
        let b = ByteSequence::empty();
        assert!(b.is_empty());
        assert_eq!(b, ByteSequence::from(""));
        assert_eq!(b.to_str(), Some(""));
    }

    #[test]
    fn test_non_utf8() {
        let b = ByteSequence::from(vec![0xff, 0x00, b'a']);
        assert_eq!(b.len(), 3);
        assert!(b.to_str().is_none());
        assert_eq!(b.as_bytes(), &[0xff, 0x00, b'a']);
    }

    #[test]
    fn test_display_and_debug() {
        let b = ByteSequence::from("alice");
        assert_eq!(b.to_string(), "alice");
        assert_eq!(format!("{:?}", b), "ByteSequence(\"alice\")");
    }
}
