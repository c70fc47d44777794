use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::types::IssuerKeyMap;

/// Options controlling a single verification call.
///
/// Constructed fresh per call; there is no process-wide mutable
/// configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerificationOptions {
    /// Run the identity pipeline after the proof pipeline.
    pub verify_identity: bool,
    /// Issuer public key (hex-encoded SEC1 point) used to derive the
    /// expected issuing address. Required when `verify_identity` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_public_key: Option<String>,
    /// Issuer key validity windows, keyed by address.
    #[serde(default)]
    pub issuer_key_map: IssuerKeyMap,
    /// Explorer lookup configuration.
    #[serde(default)]
    pub lookup: LookupConfig,
}

/// Configuration of the explorer consensus lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Number of independent explorer backends that must agree on the
    /// transaction data before it is trusted. Validated per call against the
    /// number of backends available for the resolved chain.
    pub minimum_explorers: usize,
    /// Overall deadline for the lookup, in milliseconds. Exceeding it aborts
    /// outstanding backend calls with a timeout error distinct from quorum
    /// failure. `None` means no deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl LookupConfig {
    /// The configured deadline as a `Duration`.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            minimum_explorers: 1,
            timeout_ms: None,
        }
    }
}
