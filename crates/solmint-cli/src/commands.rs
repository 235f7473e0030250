use std::path::{Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;
use solmint_client::{ChainClient, Explorer, MemoryCluster, MintConfig, Minter, StorageClient};
use solmint_types::{Address, CollectionRecord, MetadataUri, NftRecord};

use crate::cli::{AddressArgs, Cli, Command, RunArgs};

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Run(args) => cmd_run(args).await,
        Command::Address(args) => cmd_address(args),
    }
}

fn resolve_config(
    config: Option<&Path>,
    assets: Option<PathBuf>,
    keystore: Option<PathBuf>,
) -> anyhow::Result<MintConfig> {
    let mut cfg = match config {
        Some(path) => MintConfig::load(path)?,
        None => MintConfig::default(),
    };
    if let Some(assets) = assets {
        cfg.assets_dir = assets;
    }
    if let Some(keystore) = keystore {
        cfg.keystore_path = keystore;
    }
    Ok(cfg)
}

/// Example data for a new token.
fn nft_record() -> NftRecord {
    NftRecord::new("Name", "SYMBOL", "Description", 0, "solana.png")
}

/// Example data for updating the token afterwards.
fn update_record() -> NftRecord {
    NftRecord::new("Update", "UPDATE", "Update Description", 100, "success.png")
}

/// Collection token record owned by the given identity.
pub fn collection_record(authority: Address) -> CollectionRecord {
    CollectionRecord::new(
        NftRecord::new(
            "TestCollectionNFT",
            "TEST",
            "Test Description Collection",
            100,
            "success.png",
        ),
        authority,
    )
}

/// Addresses and final URI produced by a completed workflow.
pub struct WorkflowSummary {
    pub collection: Address,
    pub nft: Address,
    pub final_uri: MetadataUri,
}

/// The demo sequence: upload collection metadata, mint the collection,
/// upload item metadata, mint the item into the collection, upload the
/// updated metadata, repoint the item's URI.
///
/// Fail-fast: the first error aborts the remaining steps; tokens
/// already minted stay on the cluster.
pub async fn run_workflow<S, C>(
    minter: &Minter<S, C>,
    authority: Address,
) -> anyhow::Result<WorkflowSummary>
where
    S: StorageClient,
    C: ChainClient,
{
    let collection_data = collection_record(authority);
    let collection_uri = minter.upload_metadata(collection_data.record()).await?;
    let collection = minter
        .create_collection_nft(&collection_uri, &collection_data)
        .await?;

    let uri = minter.upload_metadata(&nft_record()).await?;
    let nft = minter
        .create_nft(&uri, &nft_record(), Some(&collection.address))
        .await?;

    let updated_uri = minter.upload_metadata(&update_record()).await?;
    minter.update_nft_uri(&updated_uri, &nft.address).await?;

    Ok(WorkflowSummary {
        collection: collection.address,
        nft: nft.address,
        final_uri: updated_uri,
    })
}

async fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), args.assets, args.keystore)?;
    let (keypair, generated) = solmint_crypto::load_or_generate(&config.keystore_path)?;
    println!("PublicKey: {}", keypair.address().to_hex().cyan());
    if generated {
        println!("  new identity written to {}", config.keystore_path.display());
    }

    let cluster = Arc::new(MemoryCluster::new(keypair.address()));
    // a fresh cluster holds no funds for the identity
    cluster
        .request_airdrop(&keypair.address(), config.airdrop_lamports)
        .await?;

    let minter = Minter::new(cluster.clone(), cluster, &config);
    let summary = run_workflow(&minter, keypair.address()).await?;

    let explorer = Explorer::from_config(&config);
    println!("{} Finished successfully", "✓".green().bold());
    println!(
        "  Collection: {}",
        explorer.address_url(&summary.collection).blue()
    );
    println!("  Token:      {}", explorer.address_url(&summary.nft).blue());
    println!("  Metadata:   {}", summary.final_uri.to_string().blue());
    Ok(())
}

fn cmd_address(args: AddressArgs) -> anyhow::Result<()> {
    let config = resolve_config(args.config.as_deref(), None, args.keystore)?;
    let (keypair, _) = solmint_crypto::load_or_generate(&config.keystore_path)?;
    println!("{}", keypair.address().to_hex());
    Ok(())
}
