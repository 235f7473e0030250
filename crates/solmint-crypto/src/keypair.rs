use solmint_types::{Address, TxSignature};

use crate::error::{KeyError, KeyResult};

/// Ed25519 signing identity.
///
/// The public key, reinterpreted as an [`Address`], is the identity's
/// on-chain account. The secret half never leaves this type except via
/// [`Keypair::to_bytes`] for keystore persistence.
pub struct Keypair(ed25519_dalek::SigningKey);

impl Keypair {
    /// Generate a new random keypair.
    pub fn generate() -> Self {
        let mut csprng = rand::thread_rng();
        Self(ed25519_dalek::SigningKey::generate(&mut csprng))
    }

    /// Restore from a raw 32-byte secret.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(ed25519_dalek::SigningKey::from_bytes(&bytes))
    }

    /// Restore from a hex-encoded secret (64 hex characters).
    pub fn from_hex(s: &str) -> KeyResult<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| KeyError::InvalidEncoding(e.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| KeyError::InvalidLength(b.len()))?;
        Ok(Self::from_bytes(arr))
    }

    /// Raw secret key bytes, for keystore persistence.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// The identity's public on-chain address.
    pub fn address(&self) -> Address {
        Address::from_raw(self.0.verifying_key().to_bytes())
    }

    /// Sign a message with the secret key.
    pub fn sign(&self, message: &[u8]) -> TxSignature {
        use ed25519_dalek::Signer;
        TxSignature::from_bytes(self.0.sign(message).to_bytes())
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Keypair({}, <secret redacted>)", self.address())
    }
}
