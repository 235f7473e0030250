use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "solmint",
    about = "solmint — mint and update NFTs against a test cluster",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full mint-and-update demo workflow
    Run(RunArgs),
    /// Print the identity's public address
    Address(AddressArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Directory holding the demo image files
    #[arg(long)]
    pub assets: Option<PathBuf>,
    /// Where the identity's secret key is stored
    #[arg(long)]
    pub keystore: Option<PathBuf>,
}

#[derive(Args)]
pub struct AddressArgs {
    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Where the identity's secret key is stored
    #[arg(long)]
    pub keystore: Option<PathBuf>,
}
