use sha2::{Digest, Sha256};

use chainseal_core::{DecodedProof, MerklePathStep};

use crate::error::MerkleError;

/// Compare the locally computed document hash against the proof's target
/// hash. Byte-for-byte, case-sensitive on the hex.
pub fn ensure_hashes_equal(local_hash: &str, target_hash: &str) -> Result<(), MerkleError> {
    if local_hash != target_hash {
        return Err(MerkleError::HashMismatch);
    }
    Ok(())
}

/// Recompute the Merkle root by folding the audit path over the target hash.
///
/// A `left` sibling hashes as `sha256(left || running)`, a `right` sibling as
/// `sha256(running || right)`. An empty path leaves the target hash as the
/// root.
pub fn recompute_root(target_hash: &str, path: &[MerklePathStep]) -> Result<String, MerkleError> {
    let mut running = hex::decode(target_hash)?;
    for step in path {
        running = match (&step.left, &step.right) {
            (Some(left), _) => {
                let mut data = hex::decode(left)?;
                data.extend_from_slice(&running);
                sha256(&data)
            }
            (_, Some(right)) => {
                let mut data = running;
                data.extend_from_slice(&hex::decode(right)?);
                sha256(&data)
            }
            // Codec validation rejects sibling-less steps; treat one here as
            // a no-op rather than guessing a side.
            (None, None) => running,
        };
    }
    Ok(hex::encode(running))
}

/// Recompute the root from `target_hash` over `path` and require it to equal
/// `merkle_root`.
pub fn ensure_merkle_root(
    path: &[MerklePathStep],
    target_hash: &str,
    merkle_root: &str,
) -> Result<(), MerkleError> {
    let recomputed = recompute_root(target_hash, path)?;
    if recomputed != merkle_root {
        return Err(MerkleError::MerkleRootMismatch);
    }
    Ok(())
}

/// Validate the full receipt: the hash recorded on chain must be exactly the
/// anchored Merkle root, and the audit path must hold.
pub fn ensure_valid_receipt(decoded: &DecodedProof, remote_hash: &str) -> Result<(), MerkleError> {
    if remote_hash != decoded.merkle_root {
        return Err(MerkleError::RemoteHashMismatch);
    }
    ensure_merkle_root(&decoded.path, &decoded.target_hash, &decoded.merkle_root)
}

fn sha256(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}
