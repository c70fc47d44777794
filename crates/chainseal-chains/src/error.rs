/// Chain resolution errors.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("could not retrieve chain: unsupported blink code '{0}'")]
    UnsupportedChain(String),

    #[error("malformed anchor: {0}")]
    MalformedAnchor(String),

    #[error("invalid transaction id: {0}")]
    InvalidTransactionId(String),
}
