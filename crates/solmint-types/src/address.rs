use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A 32-byte on-chain account address.
///
/// Addresses identify both signing identities (derived from an ed25519
/// public key) and token mints (assigned by the cluster at creation).
/// They are opaque to this crate: the only operations are comparison,
/// hex encoding, and parsing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    bytes: [u8; 32],
}

impl Address {
    /// Create from raw 32 bytes (e.g. an ed25519 public key).
    pub fn from_raw(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Mint a fresh random address, unique with overwhelming probability.
    ///
    /// Used by the in-memory cluster when assigning new token mints.
    pub fn unique() -> Self {
        let mut bytes = [0u8; 32];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self { bytes }
    }

    /// The raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.bytes
    }

    /// Full hex-encoded string (64 hex characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Short identifier (first 8 hex characters).
    pub fn short_id(&self) -> String {
        format!("sol:{}", hex::encode(&self.bytes[..4]))
    }

    /// Parse from a hex string, with or without the `sol:` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("sol:").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self { bytes: arr })
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.short_id())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}
