//! Chainseal Codec — Decodes `proofValue` payloads and recomputes Merkle
//! roots.

pub mod decode;
pub mod error;
pub mod merkle;

pub use decode::{decode, encode};
pub use error::{DecodeError, MerkleError};
pub use merkle::{ensure_hashes_equal, ensure_merkle_root, ensure_valid_receipt, recompute_root};
