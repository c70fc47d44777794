/// JSON-LD hashing and loading errors.
#[derive(Debug, thiserror::Error)]
pub enum JsonLdError {
    #[error("document has multiple proofs but no target proof was specified")]
    NoProofSpecified,

    #[error("target proof not present on the document")]
    TargetProofNotFound,

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("json-ld normalization failed: {0}")]
    Normalization(String),

    #[error("found unmapped fields during json-ld normalization: {}", .0.join(", "))]
    UnmappedFields(Vec<String>),

    #[error("no preloaded context for {0}")]
    UnknownContext(String),
}
