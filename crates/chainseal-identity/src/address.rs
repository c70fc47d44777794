use bitcoin::{Address, Network, PublicKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use sha3::{Digest, Keccak256};

use chainseal_chains::{BlockchainDescriptor, ChainFamily};

use crate::error::IdentityError;

/// Derive the issuing address for a public key on the given chain.
///
/// Bitcoin-family chains yield a P2PKH address under the network parameters
/// implied by the descriptor. EVM chains (Ethereum nets, bloxberg, Arbitrum)
/// yield the standard Keccak-256 address of the uncompressed secp256k1
/// point.
pub fn derive_issuing_address(
    public_key_hex: &str,
    chain: &BlockchainDescriptor,
) -> Result<String, IdentityError> {
    let bytes = hex::decode(public_key_hex.trim_start_matches("0x"))
        .map_err(|e| IdentityError::InvalidPublicKey(e.to_string()))?;
    match chain.family {
        ChainFamily::Bitcoin => bitcoin_p2pkh(&bytes, chain),
        ChainFamily::Ethereum => ethereum_address(&bytes),
    }
}

fn bitcoin_p2pkh(bytes: &[u8], chain: &BlockchainDescriptor) -> Result<String, IdentityError> {
    let public_key =
        PublicKey::from_slice(bytes).map_err(|e| IdentityError::InvalidPublicKey(e.to_string()))?;
    let network = match chain.code {
        "bitcoin" => Network::Bitcoin,
        "regtest" => Network::Regtest,
        // testnet and the mocknet pseudo-chain share testnet parameters
        _ => Network::Testnet,
    };
    Ok(Address::p2pkh(&public_key, network).to_string())
}

fn ethereum_address(bytes: &[u8]) -> Result<String, IdentityError> {
    let key = k256::PublicKey::from_sec1_bytes(bytes)
        .map_err(|e| IdentityError::InvalidPublicKey(e.to_string()))?;
    let point = key.to_encoded_point(false);
    // Keccak over the 64 coordinate bytes, skipping the 0x04 tag.
    let digest = Keccak256::digest(&point.as_bytes()[1..]);
    Ok(format!("0x{}", hex::encode(&digest[12..])))
}
