//! Core data model for the solmint workflow.
//!
//! Defines the on-chain identifiers (addresses, transaction signatures),
//! the token records fed into the mint workflow, and the off-chain JSON
//! metadata schema tokens point at.

pub mod address;
pub mod commitment;
pub mod error;
pub mod metadata;
pub mod record;
pub mod signature;

pub use address::Address;
pub use commitment::Commitment;
pub use error::TypeError;
pub use metadata::{MetadataUri, OffChainMetadata};
pub use record::{CollectionRecord, NftRecord, MAX_BASIS_POINTS};
pub use signature::TxSignature;
