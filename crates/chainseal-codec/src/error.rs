/// Proof value decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("proof value is missing or empty")]
    MissingProofValue,

    #[error("proof value does not carry the base58btc multibase prefix 'z'")]
    InvalidMultibasePrefix,

    #[error("base58 decoding failed: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("cbor decoding failed: {0}")]
    Cbor(String),

    #[error("cbor encoding failed: {0}")]
    CborEncode(String),

    #[error("merkle path step {0} must name exactly one of left/right")]
    InvalidPathStep(usize),
}

/// Merkle verification errors.
#[derive(Debug, thiserror::Error)]
pub enum MerkleError {
    #[error("computed hash does not match the proof target hash")]
    HashMismatch,

    #[error("merkle root does not match the recomputed root")]
    MerkleRootMismatch,

    #[error("remote hash does not match the anchored merkle root")]
    RemoteHashMismatch,

    #[error("invalid hex in merkle proof: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
