/// Issuer identity errors.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid issuer public key: {0}")]
    InvalidPublicKey(String),

    #[error("address derivation is not supported for chain '{0}'")]
    UnsupportedChain(String),

    #[error("transaction issuing address is not among the issuer's keys: {0}")]
    UnknownIssuingAddress(String),

    #[error("transaction was anchored before the issuing key was created")]
    KeyNotYetValid,

    #[error("transaction was anchored after the issuing key was revoked")]
    KeyRevoked,

    #[error("transaction was anchored after the issuing key expired")]
    KeyExpired,

    #[error("derived issuing address does not match the transaction issuing address")]
    IssuingAddressMismatch,
}
