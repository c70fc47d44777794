//! Shared test doubles for the Chainseal integration suite.
//!
//! The canonicalizer here is a deterministic stand-in for URDNA2015, not an
//! implementation of it: it emits one quad per top-level property and
//! reproduces the one behavior the hash engine defends against — properties
//! missing from the declared vocabulary are either silently dropped or, when
//! the expansion context carries the fallback vocabulary, surfaced under
//! fallback URIs.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use chainseal_chains::ChainFamily;
use chainseal_codec::encode;
use chainseal_core::{DecodedProof, MerklePathStep, TransactionData};
use chainseal_explorers::{ExplorerBackend, ExplorerError};
use chainseal_jsonld::{
    compute_local_hash_with_fallback, Canonicalizer, JsonLdError, NormalizeOptions, FALLBACK_VOCAB,
};

/// Deterministic canonicalizer over a declared vocabulary.
pub struct StubCanonicalizer {
    declared: HashSet<String>,
}

impl StubCanonicalizer {
    pub fn new(declared: &[&str]) -> Self {
        Self {
            declared: declared.iter().map(|term| term.to_string()).collect(),
        }
    }
}

#[async_trait]
impl Canonicalizer for StubCanonicalizer {
    async fn normalize(
        &self,
        document: &Value,
        options: &NormalizeOptions,
    ) -> Result<String, JsonLdError> {
        let object = document
            .as_object()
            .ok_or_else(|| JsonLdError::InvalidDocument("not an object".into()))?;
        let fallback_active = context_has_fallback(&options.expand_context);

        let mut lines = Vec::new();
        for (key, value) in object {
            if key.starts_with('@') {
                continue;
            }
            if self.declared.contains(key) {
                lines.push(format!(
                    "<urn:credential> <https://w3id.org/credentials#{key}> {value} ."
                ));
            } else if fallback_active {
                lines.push(format!(
                    "<urn:credential> <{FALLBACK_VOCAB}{key}> {value} ."
                ));
            }
            // otherwise the property is silently dropped, like jsonld does
        }
        lines.sort();
        Ok(lines.join("\n"))
    }
}

fn context_has_fallback(context: &Value) -> bool {
    match context {
        Value::Array(entries) => entries.iter().any(|entry| {
            entry
                .get("@vocab")
                .and_then(Value::as_str)
                .is_some_and(|vocab| vocab == FALLBACK_VOCAB)
        }),
        _ => false,
    }
}

/// Explorer backend answering from a canned response.
pub struct StaticExplorer {
    pub name: &'static str,
    pub priority: u32,
    pub family: ChainFamily,
    pub response: Option<TransactionData>,
}

impl StaticExplorer {
    pub fn serving(
        name: &'static str,
        priority: u32,
        family: ChainFamily,
        data: TransactionData,
    ) -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            name,
            priority,
            family,
            response: Some(data),
        })
    }

    pub fn broken(
        name: &'static str,
        priority: u32,
        family: ChainFamily,
    ) -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            name,
            priority,
            family,
            response: None,
        })
    }
}

#[async_trait]
impl ExplorerBackend for StaticExplorer {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn family(&self) -> ChainFamily {
        self.family
    }

    async fn fetch(
        &self,
        _client: &reqwest::Client,
        _transaction_id: &str,
    ) -> Result<TransactionData, ExplorerError> {
        self.response
            .clone()
            .ok_or_else(|| ExplorerError::Parse("canned failure".into()))
    }
}

/// A plausible anchoring time for fixtures.
pub fn anchor_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

pub fn transaction_data(remote_hash: &str, issuing_address: &str) -> TransactionData {
    TransactionData {
        remote_hash: remote_hash.into(),
        issuing_address: issuing_address.into(),
        time: anchor_time(),
        revoked_addresses: HashSet::new(),
    }
}

/// An unsigned fixture credential whose top-level properties are all in the
/// default declared vocabulary.
pub fn unsigned_credential() -> Value {
    json!({
        "@context": [
            "https://www.w3.org/2018/credentials/v1",
            "https://w3id.org/chainseal/v1"
        ],
        "id": "urn:uuid:e3351aa6-61e2-4d13-bd96-e848aa0c75cd",
        "type": ["VerifiableCredential"],
        "issuer": "https://issuer.example.org/profile.json",
        "issuanceDate": "2023-11-14T22:13:20Z",
        "credentialSubject": {"id": "urn:uuid:7d3d512e-ba58-4d7c-886e-acb5f4ee20d9"}
    })
}

/// Vocabulary covering [`unsigned_credential`].
pub fn declared_terms() -> Vec<&'static str> {
    vec!["id", "type", "issuer", "issuanceDate", "credentialSubject"]
}

/// Hash the document with the given canonicalizer, build a single-leaf
/// receipt anchored at `anchor`, and attach the resulting proof. Returns the
/// decoded form for reference.
pub async fn sign_credential(
    document: &mut Value,
    anchor: &str,
    canonicalizer: &dyn Canonicalizer,
) -> DecodedProof {
    sign_credential_with_path(document, anchor, canonicalizer, Vec::new()).await
}

/// Like [`sign_credential`], but batches the document under a Merkle path.
pub async fn sign_credential_with_path(
    document: &mut Value,
    anchor: &str,
    canonicalizer: &dyn Canonicalizer,
    path: Vec<MerklePathStep>,
) -> DecodedProof {
    let target_hash = compute_local_hash_with_fallback(document, None, canonicalizer)
        .await
        .expect("fixture document must hash");
    let merkle_root =
        chainseal_codec::recompute_root(&target_hash, &path).expect("fixture path must fold");
    let decoded = DecodedProof {
        target_hash,
        merkle_root,
        path,
        anchors: vec![anchor.to_string()],
    };
    document["proof"] = json!({
        "type": "MerkleProof2019",
        "created": "2023-11-14T22:13:25Z",
        "proofValue": encode(&decoded).expect("fixture proof must encode"),
        "proofPurpose": "assertionMethod",
        "verificationMethod": "ecdsa-koblitz-pubkey:0x7e5F4552091A69125d5DfCb7b8C2659029395Bdf"
    });
    decoded
}
