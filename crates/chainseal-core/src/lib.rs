//! Chainseal Core — Shared types for MerkleProof2019 credential verification.

pub mod config;
pub mod types;

pub use config::{LookupConfig, VerificationOptions};
pub use types::{
    DecodedProof, IssuerKeyMap, IssuerKeyRecord, MerklePathStep, Proof, TransactionData,
    VerificationResult, MERKLE_PROOF_2019,
};
