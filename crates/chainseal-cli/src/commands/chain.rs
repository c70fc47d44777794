//! `chainseal chain` — Resolve the anchoring blockchain.

use anyhow::Context;
use clap::Args;

#[derive(Args, Debug)]
pub struct ChainArgs {
    /// Path to the credential JSON file.
    pub file: String,
}

pub fn run(args: &ChainArgs) -> anyhow::Result<()> {
    let (_, decoded) = super::load_decoded_proof(&args.file)?;
    let chain = chainseal_chains::get_chain(Some(&decoded))?
        .context("anchor names a recognized family but an unmapped network")?;

    println!("{}", serde_json::to_string_pretty(&chain)?);
    if chain.test {
        println!("note: this is a test network");
    }
    Ok(())
}
