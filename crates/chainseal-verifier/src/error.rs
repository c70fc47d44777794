use chainseal_chains::ChainError;
use chainseal_codec::{DecodeError, MerkleError};
use chainseal_explorers::ExplorerError;
use chainseal_identity::IdentityError;
use chainseal_jsonld::JsonLdError;

/// Errors surfaced by the verification pipeline.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("the passed document is not signed")]
    UnsignedDocument,

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("could not retrieve chain")]
    UnresolvedChain,

    #[error("identity verification requires an issuer public key")]
    MissingIssuerPublicKey,

    #[error("identity verification requires transaction data from an explorer lookup")]
    MissingTransactionData,

    #[error("pipeline state missing {0}")]
    MissingState(&'static str),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("explorer error: {0}")]
    Explorer(#[from] ExplorerError),

    #[error("hashing error: {0}")]
    JsonLd(#[from] JsonLdError),

    #[error("merkle error: {0}")]
    Merkle(#[from] MerkleError),

    #[error("identity error: {0}")]
    Identity(#[from] IdentityError),
}
