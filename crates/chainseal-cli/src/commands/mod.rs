pub mod chain;
pub mod decode;
pub mod lookup;

use anyhow::Context;
use chainseal_core::{DecodedProof, Proof};

/// Load a credential file and decode its most recent MerkleProof2019 proof.
pub(crate) fn load_decoded_proof(file: &str) -> anyhow::Result<(Proof, DecodedProof)> {
    let raw = std::fs::read_to_string(file).with_context(|| format!("reading {file}"))?;
    let document: serde_json::Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing {file}"))?;
    let proof = chainseal_verifier::merkle_proofs(&document)
        .into_iter()
        .last()
        .context("document carries no MerkleProof2019 proof")?;
    let decoded = chainseal_codec::decode(&proof)?;
    Ok((proof, decoded))
}
