//! Chainseal Verifier — The fixed-pipeline orchestrator.
//!
//! `MerkleProofVerifier` sequences decoding, hashing, the explorer consensus
//! lookup and the identity checks into one fail-fast state machine and
//! reduces the outcome to a `VerificationResult`.

pub mod error;
pub mod pipeline;
pub mod verifier;

pub use error::VerifyError;
pub use pipeline::{IdentityStep, ProofStep};
pub use verifier::{merkle_proofs, MerkleProofVerifier, StepObserver};
