use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solmint_types::{
    Address, CollectionRecord, Commitment, MetadataUri, NftRecord, OffChainMetadata, TxSignature,
};

use crate::error::ClientResult;

/// Parameters for a create-token transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTokenParams {
    pub uri: MetadataUri,
    pub name: String,
    pub symbol: String,
    pub seller_fee_basis_points: u16,
    pub is_collection: bool,
    pub collection: Option<Address>,
}

impl CreateTokenParams {
    /// Parameters for a regular item token, optionally linked to a
    /// parent collection.
    pub fn from_record(uri: &MetadataUri, record: &NftRecord, collection: Option<&Address>) -> Self {
        Self {
            uri: uri.clone(),
            name: record.name.clone(),
            symbol: record.symbol.clone(),
            seller_fee_basis_points: record.seller_fee_basis_points,
            is_collection: false,
            collection: collection.copied(),
        }
    }

    /// Parameters for a collection token.
    pub fn from_collection_record(uri: &MetadataUri, record: &CollectionRecord) -> Self {
        Self {
            uri: uri.clone(),
            name: record.record().name.clone(),
            symbol: record.record().symbol.clone(),
            seller_fee_basis_points: record.record().seller_fee_basis_points,
            is_collection: record.is_collection,
            collection: None,
        }
    }
}

/// Parameters for an update-token transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTokenParams {
    pub address: Address,
    pub uri: MetadataUri,
}

/// On-chain state of a token as returned by create and lookup calls.
///
/// The address is assigned exactly once, at creation, and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHandle {
    pub address: Address,
    pub uri: MetadataUri,
    pub name: String,
    pub symbol: String,
    pub seller_fee_basis_points: u16,
    pub is_collection: bool,
    pub collection: Option<Address>,
    pub update_authority: Address,
}

/// Decentralized storage boundary: content in, URI out.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Upload raw bytes (an image file) and return its URI.
    async fn upload(&self, bytes: &[u8], filename: &str) -> ClientResult<MetadataUri>;

    /// Upload a JSON metadata document and return its URI.
    async fn upload_json_metadata(&self, metadata: &OffChainMetadata) -> ClientResult<MetadataUri>;
}

/// Chain boundary: transaction submission and account lookup.
///
/// Implementations are bound to one signing identity at construction;
/// every transaction is paid for and authorized by that identity.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Credit test funds to an address.
    async fn request_airdrop(&self, address: &Address, lamports: u64) -> ClientResult<TxSignature>;

    /// Submit a create-token transaction and wait for `commitment`.
    async fn create_token(
        &self,
        params: &CreateTokenParams,
        commitment: Commitment,
    ) -> ClientResult<TokenHandle>;

    /// Look up an existing token by its mint address.
    async fn find_by_address(&self, address: &Address) -> ClientResult<TokenHandle>;

    /// Submit an update-token transaction and wait for `commitment`.
    async fn update_token(
        &self,
        params: &UpdateTokenParams,
        commitment: Commitment,
    ) -> ClientResult<TxSignature>;
}

#[async_trait]
impl<T: StorageClient + ?Sized> StorageClient for Arc<T> {
    async fn upload(&self, bytes: &[u8], filename: &str) -> ClientResult<MetadataUri> {
        (**self).upload(bytes, filename).await
    }

    async fn upload_json_metadata(&self, metadata: &OffChainMetadata) -> ClientResult<MetadataUri> {
        (**self).upload_json_metadata(metadata).await
    }
}

#[async_trait]
impl<T: ChainClient + ?Sized> ChainClient for Arc<T> {
    async fn request_airdrop(&self, address: &Address, lamports: u64) -> ClientResult<TxSignature> {
        (**self).request_airdrop(address, lamports).await
    }

    async fn create_token(
        &self,
        params: &CreateTokenParams,
        commitment: Commitment,
    ) -> ClientResult<TokenHandle> {
        (**self).create_token(params, commitment).await
    }

    async fn find_by_address(&self, address: &Address) -> ClientResult<TokenHandle> {
        (**self).find_by_address(address).await
    }

    async fn update_token(
        &self,
        params: &UpdateTokenParams,
        commitment: Commitment,
    ) -> ClientResult<TxSignature> {
        (**self).update_token(params, commitment).await
    }
}
