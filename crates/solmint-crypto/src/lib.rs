//! Signing identities for solmint.
//!
//! An identity is an ed25519 keypair; its public key doubles as the
//! on-chain [`Address`](solmint_types::Address) that pays for and owns
//! every token created in a run. The keystore persists the secret half
//! between runs so the same identity can be reused.

pub mod error;
pub mod keypair;
pub mod keystore;

pub use error::{KeyError, KeyResult};
pub use keypair::Keypair;
pub use keystore::load_or_generate;
