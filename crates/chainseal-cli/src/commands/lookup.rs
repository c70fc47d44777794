//! `chainseal lookup` — Run the explorer consensus lookup for a credential's
//! anchoring transaction.

use anyhow::Context;
use clap::Args;

use chainseal_core::LookupConfig;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Path to the credential JSON file.
    pub file: String,

    /// Explorer backends that must agree before the data is trusted.
    #[arg(long, default_value_t = 1)]
    pub min_explorers: usize,

    /// Overall lookup deadline in milliseconds.
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

pub async fn run(args: &LookupArgs) -> anyhow::Result<()> {
    let (_, decoded) = super::load_decoded_proof(&args.file)?;
    let chain = chainseal_chains::get_chain(Some(&decoded))?
        .context("anchor names a recognized family but an unmapped network")?;
    let transaction_id = chainseal_chains::transaction_id(&decoded)?;

    tracing::info!(
        chain = chain.code,
        transaction_id = %transaction_id,
        "starting consensus lookup"
    );

    let config = LookupConfig {
        minimum_explorers: args.min_explorers,
        timeout_ms: args.timeout_ms,
    };
    let data = chainseal_explorers::look_for_tx(&transaction_id, chain, &[], &config).await?;

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
