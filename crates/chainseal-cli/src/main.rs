//! Chainseal CLI — Inspect blockchain-anchored credentials.
//!
//! Subcommands: decode, chain, lookup. Full pipeline verification is a
//! library concern (`chainseal-verifier`) because it needs an injected
//! JSON-LD canonicalizer.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Chainseal — MerkleProof2019 credential tooling.
#[derive(Parser, Debug)]
#[command(name = "chainseal", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a credential's MerkleProof2019 proof value.
    Decode(commands::decode::DecodeArgs),
    /// Resolve the blockchain a credential is anchored to.
    Chain(commands::chain::ChainArgs),
    /// Fetch the anchoring transaction via the explorer consensus lookup.
    Lookup(commands::lookup::LookupArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Decode(args) => commands::decode::run(args),
        Commands::Chain(args) => commands::chain::run(args),
        Commands::Lookup(args) => commands::lookup::run(args).await,
    }
}
