use chainseal_core::DecodedProof;

use crate::error::ChainError;
use crate::registry::{by_code, by_signature_value, BlockchainDescriptor};

/// Protocol tag every anchor starts with.
pub const ANCHOR_PROTOCOL: &str = "blink";

/// Resolve the blockchain a decoded proof is anchored to.
///
/// Only the first anchor is consulted; additional anchors are informational.
/// Returns `Ok(None)` when there is nothing to resolve (no proof, no anchors)
/// or when a recognized family names an unmapped network. An unrecognized
/// family is an error.
pub fn get_chain(
    proof: Option<&DecodedProof>,
) -> Result<Option<&'static BlockchainDescriptor>, ChainError> {
    let Some(anchor) = proof.and_then(|p| p.anchors.first()) else {
        return Ok(None);
    };
    resolve_anchor(anchor)
}

fn resolve_anchor(anchor: &str) -> Result<Option<&'static BlockchainDescriptor>, ChainError> {
    let segments: Vec<&str> = anchor.split(':').collect();
    if segments.len() != 4 {
        return Err(ChainError::MalformedAnchor(format!(
            "expected 4 colon-delimited segments, got {}",
            segments.len()
        )));
    }
    let (blink_code, network) = (segments[1], segments[2]);

    let main_chain = match blink_code {
        "mocknet" => return Ok(by_signature_value("mocknet")),
        "btc" => "Bitcoin",
        "eth" => "Ethereum",
        "arb" => "Arbitrum",
        other => return Err(ChainError::UnsupportedChain(other.to_string())),
    };

    // bloxberg is an Ethereum-compatible private chain with its own
    // descriptor; the generic naming rule below would miss it.
    if main_chain == "Ethereum" && network == "bloxberg" {
        return Ok(by_signature_value("ethbloxberg"));
    }

    if main_chain == "Arbitrum" {
        return Ok(match network {
            "sepolia" => by_signature_value("arbitrumSepolia"),
            "one" | "mainnet" => by_signature_value("arbitrumOne"),
            _ => None,
        });
    }

    let signature_value = format!("{}{}", main_chain.to_lowercase(), capitalize(network));
    Ok(by_signature_value(&signature_value))
}

/// Whether a chain code names a registered test network or the mocknet
/// pseudo-chain. Unknown codes are simply not mock chains.
pub fn is_mock_chain(code: &str) -> bool {
    by_code(code).map(|chain| chain.test).unwrap_or(false)
}

/// Extract the anchoring transaction id: the last colon segment of the first
/// anchor.
pub fn transaction_id(proof: &DecodedProof) -> Result<String, ChainError> {
    let anchor = proof
        .anchors
        .first()
        .ok_or_else(|| ChainError::MalformedAnchor("proof carries no anchors".into()))?;
    let tx_id = anchor
        .rsplit(':')
        .next()
        .unwrap_or_default();
    if !is_transaction_id_valid(tx_id) {
        return Err(ChainError::InvalidTransactionId(anchor.clone()));
    }
    Ok(tx_id.to_string())
}

/// A transaction id must be a non-empty single segment.
pub fn is_transaction_id_valid(tx_id: &str) -> bool {
    !tx_id.is_empty() && !tx_id.contains(':')
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
