use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proof type handled by this engine.
pub const MERKLE_PROOF_2019: &str = "MerkleProof2019";

/// A MerkleProof2019 linked-data proof as attached to a credential under its
/// `proof` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proof {
    /// Proof type (e.g. "MerkleProof2019").
    #[serde(rename = "type")]
    pub proof_type: String,
    /// Creation timestamp as issued. Kept verbatim: issuers emit a variety of
    /// ISO-8601 shapes, some without a timezone.
    pub created: String,
    /// Opaque encoded proof payload (multibase base58btc over CBOR).
    pub proof_value: String,
    /// Purpose of the proof (e.g. "assertionMethod").
    pub proof_purpose: String,
    /// Verification method reference (e.g. "ecdsa-koblitz-pubkey:0x...").
    pub verification_method: String,
    /// ENS name advertised by some EVM issuers.
    #[serde(default, rename = "ens_name", skip_serializing_if = "Option::is_none")]
    pub ens_name: Option<String>,
}

/// One step of a Merkle audit path. Exactly one of `left`/`right` is
/// populated; the codec validates this rather than assuming it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerklePathStep {
    /// Sibling hash to the left of the running hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Sibling hash to the right of the running hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl MerklePathStep {
    /// A step is well formed when it names exactly one sibling.
    pub fn is_well_formed(&self) -> bool {
        self.left.is_some() != self.right.is_some()
    }
}

/// The structured form of a decoded `proofValue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedProof {
    /// Hash of the anchored document (hex).
    pub target_hash: String,
    /// Root of the Merkle tree the document was batched into (hex).
    pub merkle_root: String,
    /// Audit path from `target_hash` up to `merkle_root`. Empty for a
    /// single-leaf tree, in which case the two hashes coincide.
    #[serde(default)]
    pub path: Vec<MerklePathStep>,
    /// Blockchain anchors of form `blink:<blinkCode>:<network>:<txid>`,
    /// oldest first. The first anchor is authoritative.
    pub anchors: Vec<String>,
}

/// Transaction data as reported by an explorer backend, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    /// Hash value recorded on chain (hex, no 0x prefix).
    pub remote_hash: String,
    /// Address that issued the anchoring transaction.
    pub issuing_address: String,
    /// Time the transaction was confirmed.
    pub time: DateTime<Utc>,
    /// Addresses the transaction paid out to; used by revocation schemes.
    #[serde(default)]
    pub revoked_addresses: HashSet<String>,
}

/// Temporal validity window of one issuer key.
///
/// All fields are unix timestamps in seconds. A transaction anchored at time
/// `t` is acceptable when `t` is strictly after `created`, strictly before
/// `revoked`, and strictly before `expires`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerKeyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revoked: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<i64>,
}

/// Issuer key records keyed by address. Lookups are case-insensitive.
pub type IssuerKeyMap = HashMap<String, IssuerKeyRecord>;

/// Terminal outcome of one `verify_proof` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether every pipeline step succeeded.
    pub verified: bool,
    /// Verification method of the proof that was checked.
    pub verification_method: String,
    /// Message of the first failing step, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResult {
    /// Successful result for the given verification method.
    pub fn passed(verification_method: impl Into<String>) -> Self {
        Self {
            verified: true,
            verification_method: verification_method.into(),
            error: None,
        }
    }

    /// Failed result carrying the triggering error's message.
    pub fn failed(verification_method: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            verified: false,
            verification_method: verification_method.into(),
            error: Some(error.to_string()),
        }
    }
}
