//! Client layer for the solmint workflow.
//!
//! The chain and storage networks sit behind two async traits,
//! [`ChainClient`] and [`StorageClient`]; [`MemoryCluster`] implements
//! both in process for tests and demos. [`Minter`] is the adapter the
//! workflow driver talks to: it translates [`NftRecord`]s into uploads
//! and transactions and hands back URIs, addresses, and signatures.
//!
//! [`NftRecord`]: solmint_types::NftRecord

pub mod client;
pub mod config;
pub mod error;
pub mod explorer;
pub mod memory;
pub mod nft;

pub use client::{ChainClient, CreateTokenParams, StorageClient, TokenHandle, UpdateTokenParams};
pub use config::MintConfig;
pub use error::{ClientError, ClientResult};
pub use explorer::Explorer;
pub use memory::MemoryCluster;
pub use nft::Minter;
