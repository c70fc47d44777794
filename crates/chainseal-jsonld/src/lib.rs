//! Chainseal JSON-LD — Canonicalization collaborators and the local hash
//! engine.
//!
//! URDNA2015 itself is not implemented here: callers inject a
//! [`Canonicalizer`], and context resolution goes through a
//! [`DocumentLoader`]. This crate owns what happens around those seams:
//! proof stripping, fallback-vocabulary injection, the unmapped-field safety
//! check, and the final SHA-256 digest.

pub mod canonicalize;
pub mod error;
pub mod hash;
pub mod loader;

pub use canonicalize::{Canonicalizer, NormalizeOptions, N_QUADS, URDNA2015};
pub use error::JsonLdError;
pub use hash::{compute_local_hash, compute_local_hash_with_fallback, unmapped_fields, FALLBACK_VOCAB};
pub use loader::{DocumentLoader, LoadedDocument, StaticDocumentLoader};
