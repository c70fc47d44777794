use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::error::JsonLdError;

/// Canonicalization algorithm expected from collaborators.
pub const URDNA2015: &str = "URDNA2015";

/// Serialization format of the normalized output.
pub const N_QUADS: &str = "application/n-quads";

/// Options passed to a canonicalizer for one normalization run.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizeOptions {
    /// Canonicalization algorithm identifier.
    pub algorithm: &'static str,
    /// Output format identifier.
    pub format: &'static str,
    /// Context the document is expanded against. This is the document's own
    /// `@context`, possibly augmented with a fallback vocabulary.
    pub expand_context: Value,
}

impl NormalizeOptions {
    /// Standard URDNA2015 / N-Quads options for the given expansion context.
    pub fn urdna2015(expand_context: Value) -> Self {
        Self {
            algorithm: URDNA2015,
            format: N_QUADS,
            expand_context,
        }
    }
}

/// External RDF canonicalizer.
///
/// Implementations normalize a JSON-LD document into a deterministic quad
/// serialization (one quad per line). The hash engine treats this as a black
/// box and only consumes the resulting string.
#[async_trait]
pub trait Canonicalizer: Send + Sync {
    /// Normalize `document` under `options`.
    async fn normalize(
        &self,
        document: &Value,
        options: &NormalizeOptions,
    ) -> Result<String, JsonLdError>;
}
