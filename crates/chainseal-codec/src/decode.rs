use chainseal_core::{DecodedProof, Proof};

use crate::error::DecodeError;

/// Multibase prefix for the base58btc alphabet.
pub const MULTIBASE_BASE58BTC: char = 'z';

/// Decode a proof's `proofValue` into its structured form.
///
/// The payload is multibase base58btc over a CBOR map with the keys
/// `targetHash`, `merkleRoot`, `path` and `anchors`. Pure and deterministic:
/// decoding the same proof twice yields identical structures.
pub fn decode(proof: &Proof) -> Result<DecodedProof, DecodeError> {
    let value = proof.proof_value.trim();
    if value.is_empty() {
        return Err(DecodeError::MissingProofValue);
    }
    let Some(encoded) = value.strip_prefix(MULTIBASE_BASE58BTC) else {
        return Err(DecodeError::InvalidMultibasePrefix);
    };

    let bytes = bs58::decode(encoded).into_vec()?;
    let decoded: DecodedProof =
        ciborium::de::from_reader(bytes.as_slice()).map_err(|e| DecodeError::Cbor(e.to_string()))?;

    for (index, step) in decoded.path.iter().enumerate() {
        if !step.is_well_formed() {
            return Err(DecodeError::InvalidPathStep(index));
        }
    }

    Ok(decoded)
}

/// Encode a decoded proof back into a `proofValue` string.
///
/// The inverse of [`decode`]; primarily useful for building fixtures and
/// round-trip tests.
pub fn encode(decoded: &DecodedProof) -> Result<String, DecodeError> {
    let mut bytes = Vec::new();
    ciborium::ser::into_writer(decoded, &mut bytes)
        .map_err(|e| DecodeError::CborEncode(e.to_string()))?;
    Ok(format!(
        "{}{}",
        MULTIBASE_BASE58BTC,
        bs58::encode(bytes).into_string()
    ))
}
