use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use chainseal_core::Proof;

use crate::canonicalize::{Canonicalizer, NormalizeOptions};
use crate::error::JsonLdError;

/// Vocabulary injected for properties with no explicit context mapping.
///
/// JSON-LD normalization silently drops undeclared properties; mapping them
/// under this vocabulary instead makes them observable, so tampering with
/// unmapped fields cannot slip past the hash.
pub const FALLBACK_VOCAB: &str = "http://fallback.org/";

/// Compute the canonical hash of a credential, expanding against the
/// document's own `@context` unchanged.
pub async fn compute_local_hash(
    document: &Value,
    target_proof: Option<&Proof>,
    canonicalizer: &dyn Canonicalizer,
) -> Result<String, JsonLdError> {
    hash_document(document, target_proof, canonicalizer, false).await
}

/// Compute the canonical hash with the fallback vocabulary injected into the
/// expansion context.
///
/// Used for chains whose context does not model every property (bloxberg):
/// any property lacking a mapping surfaces in the normalized quads and fails
/// the unmapped-field check instead of being silently dropped.
pub async fn compute_local_hash_with_fallback(
    document: &Value,
    target_proof: Option<&Proof>,
    canonicalizer: &dyn Canonicalizer,
) -> Result<String, JsonLdError> {
    hash_document(document, target_proof, canonicalizer, true).await
}

async fn hash_document(
    document: &Value,
    target_proof: Option<&Proof>,
    canonicalizer: &dyn Canonicalizer,
    inject_fallback: bool,
) -> Result<String, JsonLdError> {
    let mut document = document.clone();
    let object = document
        .as_object_mut()
        .ok_or_else(|| JsonLdError::InvalidDocument("document is not a JSON object".into()))?;

    let context = object
        .get("@context")
        .cloned()
        .ok_or_else(|| JsonLdError::InvalidDocument("document carries no @context".into()))?;
    let expand_context = if inject_fallback {
        with_fallback_vocab(context)
    } else {
        context
    };

    strip_proofs(object, target_proof)?;

    let options = NormalizeOptions::urdna2015(expand_context);
    let normalized = canonicalizer.normalize(&document, &options).await?;

    if let Some(fields) = unmapped_fields(&normalized) {
        tracing::warn!(fields = ?fields, "document contains unmapped fields");
        return Err(JsonLdError::UnmappedFields(fields));
    }

    Ok(hex::encode(Sha256::digest(normalized.as_bytes())))
}

/// Reproduce the document bytes as they were at signing time.
///
/// A single-object `proof` is removed outright. A list-form `proof` (chained
/// proofs, oldest first) is truncated to the entries strictly preceding the
/// target proof, which requires the caller to say which proof is being
/// verified.
fn strip_proofs(
    object: &mut serde_json::Map<String, Value>,
    target_proof: Option<&Proof>,
) -> Result<(), JsonLdError> {
    match object.get("proof") {
        None => Ok(()),
        Some(Value::Array(proofs)) => {
            let target = target_proof.ok_or(JsonLdError::NoProofSpecified)?;
            let index = proofs
                .iter()
                .position(|p| {
                    p.get("proofValue").and_then(Value::as_str) == Some(target.proof_value.as_str())
                })
                .ok_or(JsonLdError::TargetProofNotFound)?;
            let preceding: Vec<Value> = proofs[..index].to_vec();
            if preceding.is_empty() {
                object.remove("proof");
            } else {
                object.insert("proof".into(), Value::Array(preceding));
            }
            Ok(())
        }
        Some(_) => {
            object.remove("proof");
            Ok(())
        }
    }
}

/// Inject `{"@vocab": FALLBACK_VOCAB}` unless the context already maps a
/// vocabulary.
fn with_fallback_vocab(context: Value) -> Value {
    let mut entries = match context {
        Value::Array(entries) => entries,
        other => vec![other],
    };
    let has_vocab = entries
        .iter()
        .any(|entry| entry.as_object().is_some_and(|o| o.contains_key("@vocab")));
    if !has_vocab {
        entries.push(json!({ "@vocab": FALLBACK_VOCAB }));
    }
    Value::Array(entries)
}

/// Scan normalized quads for properties mapped under the fallback
/// vocabulary. Returns the deduplicated, sorted property names, or `None`
/// when the document is fully mapped.
pub fn unmapped_fields(normalized: &str) -> Option<Vec<String>> {
    let marker = format!("<{FALLBACK_VOCAB}");
    let mut fields: Vec<String> = normalized
        .lines()
        .filter_map(|line| {
            let start = line.find(&marker)? + marker.len();
            let rest = &line[start..];
            let end = rest.find('>')?;
            Some(rest[..end].to_string())
        })
        .collect();
    fields.sort();
    fields.dedup();
    if fields.is_empty() {
        None
    } else {
        Some(fields)
    }
}
