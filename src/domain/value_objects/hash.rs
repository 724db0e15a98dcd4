//! Content hash and stable fingerprints
//!
//! `ContentHash` identifies generated text (used by the manifest to skip
//! rewriting unchanged artifacts). `Fingerprint` identifies a pipeline
//! input value and is what memo tables are keyed by.

use std::fmt;

use sha2::{Digest, Sha256};

/// Content hash value object
///
/// Wraps a SHA-256 hash string with the `sha256:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Create a new ContentHash from a raw hash string (with or without prefix)
    pub fn new(raw_hash: &str) -> Self {
        if raw_hash.starts_with(Self::PREFIX) {
            Self(raw_hash.to_string())
        } else {
            Self(format!("{}{}", Self::PREFIX, raw_hash))
        }
    }

    /// Create a ContentHash by computing SHA-256 of content
    pub fn from_content(content: &str) -> Self {
        let hash = Sha256::digest(content.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Get the full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get just the hex part without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// 256-bit digest of a pipeline value's structural identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 16 hex chars are plenty for logs
        write!(f, "{}", &self.to_hex()[..16])
    }
}

/// Streaming SHA-256 with an unambiguous encoding of composite values
pub struct FingerprintHasher(Sha256);

impl FingerprintHasher {
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    pub fn write_u8(&mut self, value: u8) {
        self.0.update([value]);
    }

    pub fn write_u64(&mut self, value: u64) {
        self.0.update(value.to_le_bytes());
    }

    /// Length-prefixed, so `("ab", "c")` and `("a", "bc")` differ.
    pub fn write_str(&mut self, value: &str) {
        self.write_u64(value.len() as u64);
        self.0.update(value.as_bytes());
    }

    /// Hashes the lowercase fold of `value`, matching case-insensitive equality.
    pub fn write_str_folded(&mut self, value: &str) {
        let mut buf = [0u8; 4];
        let mut count = 0u64;
        for c in value.chars().flat_map(char::to_lowercase) {
            self.0.update(c.encode_utf8(&mut buf).as_bytes());
            count += 1;
        }
        // Terminator instead of a length prefix, the folded length is only known afterwards.
        self.write_u8(0xff);
        self.write_u64(count);
    }

    pub fn write_opt_str(&mut self, value: Option<&str>) {
        match value {
            Some(v) => {
                self.write_u8(1);
                self.write_str(v);
            }
            None => self.write_u8(0),
        }
    }

    pub fn finish(self) -> Fingerprint {
        let digest = self.0.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Fingerprint(bytes)
    }
}

impl Default for FingerprintHasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Values that can be fingerprinted for memoization.
///
/// Implementations must agree with `PartialEq`: equal values feed the hasher
/// identical bytes.
pub trait StableHash {
    fn stable_hash(&self, hasher: &mut FingerprintHasher);

    fn fingerprint(&self) -> Fingerprint {
        let mut hasher = FingerprintHasher::new();
        self.stable_hash(&mut hasher);
        hasher.finish()
    }
}

impl StableHash for () {
    fn stable_hash(&self, _hasher: &mut FingerprintHasher) {}
}

impl StableHash for String {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        hasher.write_str(self);
    }
}

impl StableHash for str {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        hasher.write_str(self);
    }
}

impl<T: StableHash> StableHash for Option<T> {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        match self {
            Some(v) => {
                hasher.write_u8(1);
                v.stable_hash(hasher);
            }
            None => hasher.write_u8(0),
        }
    }
}

impl<T: StableHash> StableHash for [T] {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        hasher.write_u64(self.len() as u64);
        for item in self {
            item.stable_hash(hasher);
        }
    }
}

impl<T: StableHash> StableHash for Vec<T> {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        self.as_slice().stable_hash(hasher);
    }
}

impl<A: StableHash, B: StableHash> StableHash for (A, B) {
    fn stable_hash(&self, hasher: &mut FingerprintHasher) {
        self.0.stable_hash(hasher);
        self.1.stable_hash(hasher);
    }
}
