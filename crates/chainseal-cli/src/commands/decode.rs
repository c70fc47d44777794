//! `chainseal decode` — Decode a credential's proof value.

use clap::Args;

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Path to the credential JSON file.
    pub file: String,
}

pub fn run(args: &DecodeArgs) -> anyhow::Result<()> {
    let (proof, decoded) = super::load_decoded_proof(&args.file)?;

    println!("verification method: {}", proof.verification_method);
    if let Some(ens_name) = &proof.ens_name {
        println!("ens name:            {ens_name}");
    }
    println!("{}", serde_json::to_string_pretty(&decoded)?);
    Ok(())
}
