use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use solmint_types::{Address, Commitment, MetadataUri, OffChainMetadata, TxSignature};
use tracing::debug;

use crate::client::{
    ChainClient, CreateTokenParams, StorageClient, TokenHandle, UpdateTokenParams,
};
use crate::error::{ClientError, ClientResult};

/// Flat fee charged per create-token transaction, in lamports.
pub const CREATE_FEE_LAMPORTS: u64 = 10_000_000;

/// In-memory cluster implementing both client boundaries.
///
/// Intended for tests and the demo driver. Storage is content-addressed
/// (the same bytes always yield the same URI); token and balance state
/// live behind `RwLock`ed maps. Every commitment level is satisfied
/// immediately, so `Finalized` never blocks.
///
/// The cluster is bound to one authority address at construction: it
/// pays the create fee and becomes the update authority of every token
/// it mints.
pub struct MemoryCluster {
    authority: Address,
    balances: RwLock<HashMap<Address, u64>>,
    tokens: RwLock<HashMap<Address, TokenHandle>>,
    blobs: RwLock<HashMap<String, Vec<u8>>>,
    slot: AtomicU64,
}

impl MemoryCluster {
    /// Create an empty cluster bound to `authority`.
    pub fn new(authority: Address) -> Self {
        Self {
            authority,
            balances: RwLock::new(HashMap::new()),
            tokens: RwLock::new(HashMap::new()),
            blobs: RwLock::new(HashMap::new()),
            slot: AtomicU64::new(0),
        }
    }

    /// Create a cluster whose authority is already funded.
    pub fn with_balance(authority: Address, lamports: u64) -> Self {
        let cluster = Self::new(authority);
        cluster
            .balances
            .write()
            .expect("lock poisoned")
            .insert(authority, lamports);
        cluster
    }

    /// Current balance of an address, zero if unknown.
    pub fn balance(&self, address: &Address) -> u64 {
        self.balances
            .read()
            .expect("lock poisoned")
            .get(address)
            .copied()
            .unwrap_or(0)
    }

    /// Number of tokens minted so far.
    pub fn token_count(&self) -> usize {
        self.tokens.read().expect("lock poisoned").len()
    }

    /// Number of blobs held in storage.
    pub fn blob_count(&self) -> usize {
        self.blobs.read().expect("lock poisoned").len()
    }

    fn next_slot(&self) -> u64 {
        self.slot.fetch_add(1, Ordering::Relaxed)
    }

    /// Derive a deterministic per-slot transaction signature.
    fn sign_tx(&self, domain: &str, payload: &[u8]) -> TxSignature {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"solmint-mocknet-tx:");
        hasher.update(domain.as_bytes());
        hasher.update(b":");
        hasher.update(payload);
        hasher.update(&self.next_slot().to_le_bytes());
        let mut sig = [0u8; 64];
        hasher.finalize_xof().fill(&mut sig);
        TxSignature::from_bytes(sig)
    }

    fn store_blob(&self, bytes: &[u8]) -> ClientResult<MetadataUri> {
        let hash = blake3::hash(bytes);
        let uri = format!("https://storage.mocknet.dev/{}", hash.to_hex());
        self.blobs
            .write()
            .expect("lock poisoned")
            .entry(uri.clone())
            .or_insert_with(|| bytes.to_vec());
        MetadataUri::new(uri).map_err(|e| ClientError::Upload(e.to_string()))
    }
}

#[async_trait]
impl StorageClient for MemoryCluster {
    async fn upload(&self, bytes: &[u8], filename: &str) -> ClientResult<MetadataUri> {
        if bytes.is_empty() {
            return Err(ClientError::Upload(format!("{filename}: empty file")));
        }
        let uri = self.store_blob(bytes)?;
        debug!(%filename, %uri, size = bytes.len(), "blob stored");
        Ok(uri)
    }

    async fn upload_json_metadata(&self, metadata: &OffChainMetadata) -> ClientResult<MetadataUri> {
        let bytes = serde_json::to_vec(metadata).map_err(|e| ClientError::Upload(e.to_string()))?;
        let uri = self.store_blob(&bytes)?;
        debug!(%uri, "metadata document stored");
        Ok(uri)
    }
}

#[async_trait]
impl ChainClient for MemoryCluster {
    async fn request_airdrop(&self, address: &Address, lamports: u64) -> ClientResult<TxSignature> {
        let mut balances = self.balances.write().expect("lock poisoned");
        *balances.entry(*address).or_insert(0) += lamports;
        debug!(%address, lamports, "airdrop credited");
        Ok(self.sign_tx("airdrop", address.as_bytes()))
    }

    async fn create_token(
        &self,
        params: &CreateTokenParams,
        commitment: Commitment,
    ) -> ClientResult<TokenHandle> {
        if params.seller_fee_basis_points > solmint_types::MAX_BASIS_POINTS {
            return Err(ClientError::Transaction(format!(
                "seller fee {} exceeds 10000 basis points",
                params.seller_fee_basis_points
            )));
        }

        let mut tokens = self.tokens.write().expect("lock poisoned");
        if let Some(collection) = &params.collection {
            match tokens.get(collection) {
                Some(parent) if parent.is_collection => {}
                Some(_) => {
                    return Err(ClientError::Transaction(format!(
                        "address {collection} is not a collection token"
                    )))
                }
                None => {
                    return Err(ClientError::Transaction(format!(
                        "unknown collection address {collection}"
                    )))
                }
            }
        }

        {
            let mut balances = self.balances.write().expect("lock poisoned");
            let balance = balances.entry(self.authority).or_insert(0);
            if *balance < CREATE_FEE_LAMPORTS {
                return Err(ClientError::Transaction(format!(
                    "insufficient funds: balance {balance} lamports, need {CREATE_FEE_LAMPORTS}"
                )));
            }
            *balance -= CREATE_FEE_LAMPORTS;
        }

        let address = Address::unique();
        let handle = TokenHandle {
            address,
            uri: params.uri.clone(),
            name: params.name.clone(),
            symbol: params.symbol.clone(),
            seller_fee_basis_points: params.seller_fee_basis_points,
            is_collection: params.is_collection,
            collection: params.collection,
            update_authority: self.authority,
        };
        tokens.insert(address, handle.clone());
        debug!(%address, %commitment, "token created");
        Ok(handle)
    }

    async fn find_by_address(&self, address: &Address) -> ClientResult<TokenHandle> {
        self.tokens
            .read()
            .expect("lock poisoned")
            .get(address)
            .cloned()
            .ok_or(ClientError::NotFound(*address))
    }

    async fn update_token(
        &self,
        params: &UpdateTokenParams,
        commitment: Commitment,
    ) -> ClientResult<TxSignature> {
        let mut tokens = self.tokens.write().expect("lock poisoned");
        let token = tokens
            .get_mut(&params.address)
            .ok_or(ClientError::NotFound(params.address))?;
        if token.update_authority != self.authority {
            return Err(ClientError::Transaction(format!(
                "update authority mismatch for token {}",
                params.address
            )));
        }
        token.uri = params.uri.clone();
        debug!(address = %params.address, uri = %params.uri, %commitment, "token uri updated");
        Ok(self.sign_tx("update", params.address.as_bytes()))
    }
}

impl std::fmt::Debug for MemoryCluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCluster")
            .field("authority", &self.authority)
            .field("token_count", &self.token_count())
            .field("blob_count", &self.blob_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solmint_types::NftRecord;

    fn authority() -> Address {
        Address::from_raw([1; 32])
    }

    fn funded_cluster() -> MemoryCluster {
        MemoryCluster::with_balance(authority(), 10 * CREATE_FEE_LAMPORTS)
    }

    fn params(collection: Option<Address>) -> CreateTokenParams {
        let uri = MetadataUri::new("https://storage/meta").unwrap();
        let record = NftRecord::new("Name", "SYMBOL", "Description", 0, "solana.png");
        CreateTokenParams::from_record(&uri, &record, collection.as_ref())
    }

    fn collection_params() -> CreateTokenParams {
        let mut p = params(None);
        p.is_collection = true;
        p
    }

    #[tokio::test]
    async fn upload_is_content_addressed() {
        let cluster = funded_cluster();
        let a = cluster.upload(b"same bytes", "a.png").await.unwrap();
        let b = cluster.upload(b"same bytes", "b.png").await.unwrap();
        let c = cluster.upload(b"other bytes", "c.png").await.unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(cluster.blob_count(), 2);
    }

    #[tokio::test]
    async fn upload_rejects_empty_file() {
        let cluster = funded_cluster();
        let err = cluster.upload(b"", "x.png").await.unwrap_err();
        assert!(matches!(err, ClientError::Upload(_)));
    }

    #[tokio::test]
    async fn created_addresses_are_unique() {
        let cluster = funded_cluster();
        let first = cluster
            .create_token(&params(None), Commitment::Finalized)
            .await
            .unwrap();
        let second = cluster
            .create_token(&params(None), Commitment::Finalized)
            .await
            .unwrap();
        assert_ne!(first.address, second.address);
    }

    #[tokio::test]
    async fn create_charges_the_fee() {
        let cluster = MemoryCluster::with_balance(authority(), CREATE_FEE_LAMPORTS);
        cluster
            .create_token(&params(None), Commitment::Finalized)
            .await
            .unwrap();
        assert_eq!(cluster.balance(&authority()), 0);
    }

    #[tokio::test]
    async fn create_fails_without_funds() {
        let cluster = MemoryCluster::new(authority());
        let err = cluster
            .create_token(&params(None), Commitment::Finalized)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transaction(_)));
        assert_eq!(cluster.token_count(), 0);
    }

    #[tokio::test]
    async fn airdrop_unblocks_creation() {
        let cluster = MemoryCluster::new(authority());
        cluster
            .request_airdrop(&authority(), CREATE_FEE_LAMPORTS)
            .await
            .unwrap();
        assert!(cluster
            .create_token(&params(None), Commitment::Finalized)
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn create_links_to_existing_collection() {
        let cluster = funded_cluster();
        let collection = cluster
            .create_token(&collection_params(), Commitment::Finalized)
            .await
            .unwrap();
        let token = cluster
            .create_token(&params(Some(collection.address)), Commitment::Finalized)
            .await
            .unwrap();
        assert_eq!(token.collection, Some(collection.address));
    }

    #[tokio::test]
    async fn create_rejects_unknown_collection() {
        let cluster = funded_cluster();
        let err = cluster
            .create_token(&params(Some(Address::unique())), Commitment::Finalized)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transaction(_)));
    }

    #[tokio::test]
    async fn create_rejects_non_collection_parent() {
        let cluster = funded_cluster();
        let plain = cluster
            .create_token(&params(None), Commitment::Finalized)
            .await
            .unwrap();
        let err = cluster
            .create_token(&params(Some(plain.address)), Commitment::Finalized)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transaction(_)));
    }

    #[tokio::test]
    async fn find_returns_created_token() {
        let cluster = funded_cluster();
        let created = cluster
            .create_token(&params(None), Commitment::Finalized)
            .await
            .unwrap();
        let found = cluster.find_by_address(&created.address).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn find_unknown_address_is_not_found() {
        let cluster = funded_cluster();
        let err = cluster.find_by_address(&Address::unique()).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_replaces_uri() {
        let cluster = funded_cluster();
        let created = cluster
            .create_token(&params(None), Commitment::Finalized)
            .await
            .unwrap();
        let new_uri = MetadataUri::new("https://storage/updated").unwrap();
        let update = UpdateTokenParams {
            address: created.address,
            uri: new_uri.clone(),
        };
        cluster
            .update_token(&update, Commitment::Finalized)
            .await
            .unwrap();
        let found = cluster.find_by_address(&created.address).await.unwrap();
        assert_eq!(found.uri, new_uri);
        assert_eq!(found.address, created.address);
    }

    #[tokio::test]
    async fn update_is_idempotent() {
        let cluster = funded_cluster();
        let created = cluster
            .create_token(&params(None), Commitment::Finalized)
            .await
            .unwrap();
        let update = UpdateTokenParams {
            address: created.address,
            uri: MetadataUri::new("https://storage/updated").unwrap(),
        };
        cluster
            .update_token(&update, Commitment::Finalized)
            .await
            .unwrap();
        cluster
            .update_token(&update, Commitment::Finalized)
            .await
            .unwrap();
        let found = cluster.find_by_address(&created.address).await.unwrap();
        assert_eq!(found.uri, update.uri);
    }

    #[tokio::test]
    async fn update_unknown_address_is_not_found() {
        let cluster = funded_cluster();
        let update = UpdateTokenParams {
            address: Address::unique(),
            uri: MetadataUri::new("https://storage/updated").unwrap(),
        };
        let err = cluster
            .update_token(&update, Commitment::Finalized)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[tokio::test]
    async fn tx_signatures_are_unique_per_transaction() {
        let cluster = funded_cluster();
        let a = cluster
            .request_airdrop(&authority(), 1)
            .await
            .unwrap();
        let b = cluster
            .request_airdrop(&authority(), 1)
            .await
            .unwrap();
        assert_ne!(a, b);
    }
}
