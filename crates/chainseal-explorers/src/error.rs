/// Explorer lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum ExplorerError {
    #[error("invalid explorer configuration: {0}")]
    Configuration(String),

    #[error("explorer quorum of {required} not reached for the transaction")]
    QuorumNotReached { required: usize },

    #[error("explorer lookup timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected explorer response: {0}")]
    Parse(String),
}
