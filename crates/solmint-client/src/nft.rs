use std::path::PathBuf;

use solmint_types::{
    Address, CollectionRecord, Commitment, MetadataUri, NftRecord, OffChainMetadata, TxSignature,
};
use tracing::info;

use crate::client::{ChainClient, CreateTokenParams, StorageClient, TokenHandle, UpdateTokenParams};
use crate::config::MintConfig;
use crate::error::{ClientError, ClientResult};
use crate::explorer::Explorer;

/// Adapter between [`NftRecord`]s and the client boundary.
///
/// Configured once per run with a storage client, a chain client, and
/// the asset directory; used read-only afterwards. Every transaction
/// waits for [`Commitment::Finalized`] because each step's output feeds
/// the next step directly.
pub struct Minter<S, C> {
    storage: S,
    chain: C,
    assets_dir: PathBuf,
    explorer: Explorer,
}

impl<S: StorageClient, C: ChainClient> Minter<S, C> {
    pub fn new(storage: S, chain: C, config: &MintConfig) -> Self {
        Self {
            storage,
            chain,
            assets_dir: config.assets_dir.clone(),
            explorer: Explorer::from_config(config),
        }
    }

    /// The chain client this minter submits transactions through.
    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// Upload a record's image and off-chain metadata document.
    ///
    /// Reads `record.image_file` from the asset directory, uploads the
    /// bytes, then uploads the JSON document pointing at the resulting
    /// image URI. Returns the metadata URI to mint against.
    pub async fn upload_metadata(&self, record: &NftRecord) -> ClientResult<MetadataUri> {
        let path = self.assets_dir.join(&record.image_file);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|source| ClientError::Io {
                path: path.clone(),
                source,
            })?;

        let image_uri = self.storage.upload(&bytes, &record.image_file).await?;
        info!(%image_uri, "image uploaded");

        let metadata = OffChainMetadata::from_record(record, &image_uri);
        let uri = self.storage.upload_json_metadata(&metadata).await?;
        info!(%uri, "metadata uploaded");
        Ok(uri)
    }

    /// Mint an item token, optionally linked to a parent collection.
    pub async fn create_nft(
        &self,
        uri: &MetadataUri,
        record: &NftRecord,
        collection: Option<&Address>,
    ) -> ClientResult<TokenHandle> {
        record.validate()?;
        let params = CreateTokenParams::from_record(uri, record, collection);
        let token = self
            .chain
            .create_token(&params, Commitment::Finalized)
            .await?;
        info!("token mint: {}", self.explorer.address_url(&token.address));
        Ok(token)
    }

    /// Mint a collection token.
    pub async fn create_collection_nft(
        &self,
        uri: &MetadataUri,
        record: &CollectionRecord,
    ) -> ClientResult<TokenHandle> {
        record.record().validate()?;
        let params = CreateTokenParams::from_collection_record(uri, record);
        let token = self
            .chain
            .create_token(&params, Commitment::Finalized)
            .await?;
        info!(
            "collection mint: {}",
            self.explorer.address_url(&token.address)
        );
        Ok(token)
    }

    /// Repoint an existing token's metadata URI.
    ///
    /// Looks the token up first so an unknown address surfaces as
    /// [`ClientError::NotFound`] rather than a failed transaction.
    pub async fn update_nft_uri(
        &self,
        uri: &MetadataUri,
        mint_address: &Address,
    ) -> ClientResult<TxSignature> {
        let token = self.chain.find_by_address(mint_address).await?;
        let params = UpdateTokenParams {
            address: token.address,
            uri: uri.clone(),
        };
        let signature = self
            .chain
            .update_token(&params, Commitment::Finalized)
            .await?;
        info!("token mint: {}", self.explorer.address_url(&token.address));
        info!("transaction: {}", self.explorer.tx_url(&signature));
        Ok(signature)
    }
}
