//! Integration test: Identity pipeline on top of the proof pipeline.
//!
//! The issuer key pair is the secp256k1 generator point, whose EVM address
//! is a fixed, well-known value.

use std::sync::Arc;

use chainseal_chains::ChainFamily;
use chainseal_core::{IssuerKeyMap, IssuerKeyRecord, VerificationOptions};
use chainseal_integration_tests::{
    anchor_time, declared_terms, sign_credential, transaction_data, unsigned_credential,
    StaticExplorer, StubCanonicalizer,
};
use chainseal_verifier::MerkleProofVerifier;

const SEPOLIA_ANCHOR: &str =
    "blink:eth:sepolia:0x9d9eb0a55e702eb18b8aa390480ea212ad34b486ef592c9e5c390481559fc8e0";
const MOCKNET_ANCHOR: &str = "blink:mocknet:mocknet:8v9n2ag2";

// Compressed generator point and its EVM address (checksummed casing, as
// explorers report it).
const ISSUER_PUBLIC_KEY: &str =
    "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
const ISSUER_ADDRESS: &str = "0x7e5F4552091A69125d5DfCb7b8C2659029395Bdf";

// A different key entirely (Bitcoin wiki example), so its EVM address
// cannot match the issuer's.
const FOREIGN_PUBLIC_KEY: &str = "0450863ad64a87ae8a2fe83c1af1a8403cb53f53e486d8511dad8a04887e5b23522cd470243453a299fa9e77237716103abc11a1df38855ed6f2ee187e9c582ba6";

fn canonicalizer() -> Arc<StubCanonicalizer> {
    Arc::new(StubCanonicalizer::new(&declared_terms()))
}

fn live_key_map() -> IssuerKeyMap {
    IssuerKeyMap::from([(
        ISSUER_ADDRESS.to_string(),
        IssuerKeyRecord {
            created: Some(anchor_time().timestamp() - 100_000),
            revoked: None,
            expires: None,
        },
    )])
}

fn options(public_key: &str, key_map: IssuerKeyMap) -> VerificationOptions {
    VerificationOptions {
        verify_identity: true,
        issuer_public_key: Some(public_key.into()),
        issuer_key_map: key_map,
        ..Default::default()
    }
}

async fn verify_with(
    options: VerificationOptions,
) -> chainseal_core::VerificationResult {
    let mut document = unsigned_credential();
    let decoded = sign_credential(&mut document, SEPOLIA_ANCHOR, &*canonicalizer()).await;
    let explorer = StaticExplorer::serving(
        "canned",
        0,
        ChainFamily::Ethereum,
        transaction_data(&decoded.merkle_root, ISSUER_ADDRESS),
    );
    MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .with_options(options)
        .with_explorers(vec![explorer])
        .verify_proof()
        .await
}

#[tokio::test]
async fn test_identity_pipeline_passes() {
    let result = verify_with(options(ISSUER_PUBLIC_KEY, live_key_map())).await;
    assert_eq!(result.error, None);
    assert!(result.verified);
}

#[tokio::test]
async fn test_proof_pipeline_alone_ignores_identity_inputs() {
    // verify_identity unset: no issuer key material needed.
    let result = verify_with(VerificationOptions::default()).await;
    assert_eq!(result.error, None);
    assert!(result.verified);
}

#[tokio::test]
async fn test_revoked_key_fails() {
    let mut key_map = live_key_map();
    key_map.get_mut(ISSUER_ADDRESS).unwrap().revoked =
        Some(anchor_time().timestamp() - 1_000);
    let result = verify_with(options(ISSUER_PUBLIC_KEY, key_map)).await;
    assert!(!result.verified);
    assert!(result.error.unwrap().contains("revoked"));
}

#[tokio::test]
async fn test_expired_key_fails() {
    let mut key_map = live_key_map();
    key_map.get_mut(ISSUER_ADDRESS).unwrap().expires =
        Some(anchor_time().timestamp() - 1_000);
    let result = verify_with(options(ISSUER_PUBLIC_KEY, key_map)).await;
    assert!(!result.verified);
    assert!(result.error.unwrap().contains("expired"));
}

#[tokio::test]
async fn test_revoked_reported_over_expired() {
    let mut key_map = live_key_map();
    let record = key_map.get_mut(ISSUER_ADDRESS).unwrap();
    record.revoked = Some(anchor_time().timestamp() - 1_000);
    record.expires = Some(anchor_time().timestamp() - 2_000);
    let result = verify_with(options(ISSUER_PUBLIC_KEY, key_map)).await;
    assert!(!result.verified);
    assert!(result.error.unwrap().contains("revoked"));
}

#[tokio::test]
async fn test_unknown_issuing_address_fails() {
    let result = verify_with(options(ISSUER_PUBLIC_KEY, IssuerKeyMap::new())).await;
    assert!(!result.verified);
    assert!(result
        .error
        .unwrap()
        .contains("not among the issuer's keys"));
}

#[tokio::test]
async fn test_key_map_lookup_is_case_insensitive() {
    let mut key_map = IssuerKeyMap::new();
    key_map.insert(
        ISSUER_ADDRESS.to_lowercase(),
        IssuerKeyRecord::default(),
    );
    let result = verify_with(options(ISSUER_PUBLIC_KEY, key_map)).await;
    assert_eq!(result.error, None);
    assert!(result.verified);
}

#[tokio::test]
async fn test_foreign_key_fails_address_comparison() {
    let result = verify_with(options(FOREIGN_PUBLIC_KEY, live_key_map())).await;
    assert!(!result.verified);
    assert!(result
        .error
        .unwrap()
        .contains("does not match the transaction issuing address"));
}

#[tokio::test]
async fn test_missing_public_key_fails() {
    let result = verify_with(VerificationOptions {
        verify_identity: true,
        issuer_public_key: None,
        issuer_key_map: live_key_map(),
        ..Default::default()
    })
    .await;
    assert!(!result.verified);
    assert!(result.error.unwrap().contains("issuer public key"));
}

#[tokio::test]
async fn test_mock_chain_has_no_transaction_data_for_identity() {
    let mut document = unsigned_credential();
    sign_credential(&mut document, MOCKNET_ANCHOR, &*canonicalizer()).await;
    let result = MerkleProofVerifier::new(&document, canonicalizer())
        .unwrap()
        .with_options(options(ISSUER_PUBLIC_KEY, live_key_map()))
        .verify_proof()
        .await;
    assert!(!result.verified);
    assert!(result.error.unwrap().contains("transaction data"));
}
