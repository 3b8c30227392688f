//! Keys and their canonical byte form.
//!
//! The map accepts three kinds of key (UTF-8 text, unsigned integers
//! up to 64 bits, raw byte strings) and treats two keys as equal
//! exactly when their canonical byte encodings are identical. The
//! encoding, not the enum variant, is the identity: `Key::from("a")`
//! equals `Key::from(&b"a"[..])`. Anything outside these kinds is
//! unrepresentable, so there is no runtime "unsupported key" error.

use core::fmt;
use std::borrow::Cow;

/// A map key. Construct via `From`/`Into`; every public map operation
/// takes `impl Into<Key>`.
#[derive(Debug, Clone)]
pub enum Key {
    Text(String),
    Int(u64),
    Bytes(Vec<u8>),
}

impl Key {
    /// Canonical byte encoding fed to the hash function.
    ///
    /// Text is its UTF-8 bytes, byte strings pass through, and
    /// integers use their minimal little-endian form (trailing zero
    /// bytes stripped, never fewer than one byte) so small values do
    /// not hash a pile of always-zero high bytes.
    pub fn normalized(&self) -> Cow<'_, [u8]> {
        match self {
            Key::Text(s) => Cow::Borrowed(s.as_bytes()),
            Key::Bytes(b) => Cow::Borrowed(b),
            Key::Int(n) => {
                let le = n.to_le_bytes();
                let used = le.iter().rposition(|&b| b != 0).map_or(1, |i| i + 1);
                Cow::Owned(le[..used].to_vec())
            }
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        // Identity is the canonical encoding; variants only matter as
        // far as they encode differently.
        self.normalized() == other.normalized()
    }
}

impl Eq for Key {}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Text(s) => f.write_str(s),
            Key::Int(n) => write!(f, "{n}"),
            Key::Bytes(b) => write!(f, "{b:02x?}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Text(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Text(s)
    }
}

impl From<u64> for Key {
    fn from(n: u64) -> Self {
        Key::Int(n)
    }
}

impl From<u32> for Key {
    fn from(n: u32) -> Self {
        Key::Int(n.into())
    }
}

impl From<u16> for Key {
    fn from(n: u16) -> Self {
        Key::Int(n.into())
    }
}

impl From<u8> for Key {
    fn from(n: u8) -> Self {
        Key::Int(n.into())
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        Key::Int(n as u64)
    }
}

impl From<Vec<u8>> for Key {
    fn from(b: Vec<u8>) -> Self {
        Key::Bytes(b)
    }
}

impl From<&[u8]> for Key {
    fn from(b: &[u8]) -> Self {
        Key::Bytes(b.to_vec())
    }
}
