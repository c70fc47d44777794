//! Integration test: Full proof-verification pipeline across crates.
//!
//! Drives `MerkleProofVerifier` end-to-end with the stub canonicalizer and
//! canned explorer backends; no network involved.

use std::sync::Arc;

use serde_json::json;

use chainseal_chains::ChainFamily;
use chainseal_core::{LookupConfig, MerklePathStep, VerificationOptions};
use chainseal_integration_tests::{
    declared_terms, sign_credential, sign_credential_with_path, transaction_data,
    unsigned_credential, StaticExplorer, StubCanonicalizer,
};
use chainseal_verifier::MerkleProofVerifier;

const TESTNET_ANCHOR: &str =
    "blink:btc:testnet:140ee9382a5c84433b9c89a5d9fea26c47415838b5841deb0c36a8a4b9121f2e";
const MOCKNET_ANCHOR: &str = "blink:mocknet:mocknet:8v9n2ag2";
const SIBLING: &str = "78e670a04db3cf419fff5fb1b11a420a34e5eeae14cc68476dcb84883b5cdb64";
const BTC_ISSUER: &str = "msgxCqNzDiezUCgQNkhvuQrAkxpkdW8aXp";

fn canonicalizer() -> Arc<StubCanonicalizer> {
    Arc::new(StubCanonicalizer::new(&declared_terms()))
}

// =========================================================================
// Mock chain: no explorer involved
// =========================================================================

#[tokio::test]
async fn test_mocknet_credential_verifies_end_to_end() {
    let mut document = unsigned_credential();
    sign_credential(&mut document, MOCKNET_ANCHOR, &*canonicalizer()).await;

    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .verify_proof()
        .await;

    assert_eq!(result.error, None);
    assert!(result.verified);
    assert_eq!(
        result.verification_method,
        "ecdsa-koblitz-pubkey:0x7e5F4552091A69125d5DfCb7b8C2659029395Bdf"
    );
}

#[tokio::test]
async fn test_tampered_field_fails_hash_comparison() {
    let mut document = unsigned_credential();
    sign_credential(&mut document, MOCKNET_ANCHOR, &*canonicalizer()).await;
    document["issuer"] = json!("https://attacker.example.org/profile.json");

    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .verify_proof()
        .await;

    assert!(!result.verified);
    assert!(result.error.unwrap().contains("does not match"));
}

#[tokio::test]
async fn test_undeclared_property_fails_as_unmapped() {
    let mut document = unsigned_credential();
    sign_credential(&mut document, MOCKNET_ANCHOR, &*canonicalizer()).await;
    // Added after signing AND missing from the context vocabulary: without
    // the fallback check this would hash identically and slip through.
    document["displayHtml"] = json!("<script>alert(1)</script>");

    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .verify_proof()
        .await;

    assert!(!result.verified);
    let error = result.error.unwrap();
    assert!(error.contains("unmapped fields"));
    assert!(error.contains("displayHtml"));
}

#[tokio::test]
async fn test_declared_extra_property_hashes_cleanly() {
    let mut terms = declared_terms();
    terms.push("displayHtml");
    let canonicalizer = Arc::new(StubCanonicalizer::new(&terms));

    let mut document = unsigned_credential();
    document["displayHtml"] = json!("<div>diploma</div>");
    sign_credential(&mut document, MOCKNET_ANCHOR, &*canonicalizer).await;

    let result = MerkleProofVerifier::new(&document, canonicalizer.clone())
        .unwrap()
        .verify_proof()
        .await;

    assert_eq!(result.error, None);
    assert!(result.verified);
}

// =========================================================================
// Real chains: explorer consensus in the loop
// =========================================================================

#[tokio::test]
async fn test_batched_credential_with_explorer_verifies() {
    let mut document = unsigned_credential();
    let path = vec![MerklePathStep {
        left: Some(SIBLING.into()),
        right: None,
    }];
    let decoded =
        sign_credential_with_path(&mut document, TESTNET_ANCHOR, &*canonicalizer(), path).await;
    assert_ne!(decoded.target_hash, decoded.merkle_root);

    let explorer = StaticExplorer::serving(
        "canned",
        0,
        ChainFamily::Bitcoin,
        transaction_data(&decoded.merkle_root, BTC_ISSUER),
    );
    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .with_explorers(vec![explorer])
        .verify_proof()
        .await;

    assert_eq!(result.error, None);
    assert!(result.verified);
}

#[tokio::test]
async fn test_quorum_of_two_verifies() {
    let mut document = unsigned_credential();
    let decoded = sign_credential(&mut document, TESTNET_ANCHOR, &*canonicalizer()).await;

    let honest1 = StaticExplorer::serving(
        "honest1",
        0,
        ChainFamily::Bitcoin,
        transaction_data(&decoded.merkle_root, BTC_ISSUER),
    );
    let lying = StaticExplorer::serving(
        "lying",
        0,
        ChainFamily::Bitcoin,
        transaction_data("0000000000000000000000000000000000000000000000000000000000000000", BTC_ISSUER),
    );
    let honest2 = StaticExplorer::serving(
        "honest2",
        0,
        ChainFamily::Bitcoin,
        transaction_data(&decoded.merkle_root, BTC_ISSUER),
    );

    let options = VerificationOptions {
        lookup: LookupConfig {
            minimum_explorers: 2,
            timeout_ms: None,
        },
        ..Default::default()
    };
    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .with_options(options)
        .with_explorers(vec![honest1, lying, honest2])
        .verify_proof()
        .await;

    assert_eq!(result.error, None);
    assert!(result.verified);
}

#[tokio::test]
async fn test_forged_remote_hash_fails_receipt_check() {
    let mut document = unsigned_credential();
    sign_credential(&mut document, TESTNET_ANCHOR, &*canonicalizer()).await;

    let forging = StaticExplorer::serving(
        "forging",
        0,
        ChainFamily::Bitcoin,
        transaction_data(
            "1111111111111111111111111111111111111111111111111111111111111111",
            BTC_ISSUER,
        ),
    );
    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .with_explorers(vec![forging])
        .verify_proof()
        .await;

    assert!(!result.verified);
    assert!(result.error.unwrap().contains("remote hash"));
}

#[tokio::test]
async fn test_broken_backend_is_skipped() {
    let mut document = unsigned_credential();
    let decoded = sign_credential(&mut document, TESTNET_ANCHOR, &*canonicalizer()).await;

    let broken = StaticExplorer::broken("broken", 0, ChainFamily::Bitcoin);
    let working = StaticExplorer::serving(
        "working",
        0,
        ChainFamily::Bitcoin,
        transaction_data(&decoded.merkle_root, BTC_ISSUER),
    );
    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .with_explorers(vec![broken, working])
        .verify_proof()
        .await;

    assert_eq!(result.error, None);
    assert!(result.verified);
}

#[tokio::test]
async fn test_excessive_quorum_is_a_configuration_error() {
    let mut document = unsigned_credential();
    sign_credential(&mut document, TESTNET_ANCHOR, &*canonicalizer()).await;

    let options = VerificationOptions {
        lookup: LookupConfig {
            minimum_explorers: 10,
            timeout_ms: None,
        },
        ..Default::default()
    };
    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .with_options(options)
        .verify_proof()
        .await;

    assert!(!result.verified);
    assert!(result.error.unwrap().contains("configuration"));
}

// =========================================================================
// Chain resolution failures
// =========================================================================

#[tokio::test]
async fn test_unmapped_network_fails_with_unresolved_chain() {
    let mut document = unsigned_credential();
    sign_credential(&mut document, "blink:btc:simnet:abc", &*canonicalizer()).await;

    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .verify_proof()
        .await;

    assert!(!result.verified);
    assert_eq!(result.error.as_deref(), Some("could not retrieve chain"));
}

#[tokio::test]
async fn test_unsupported_family_fails() {
    let mut document = unsigned_credential();
    sign_credential(&mut document, "blink:unsupported:network:abc", &*canonicalizer()).await;

    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .verify_proof()
        .await;

    assert!(!result.verified);
    assert!(result.error.unwrap().contains("unsupported blink code"));
}
