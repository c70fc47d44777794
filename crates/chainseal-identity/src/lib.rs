//! Chainseal Identity — Derives chain addresses from issuer public keys and
//! validates issuing-key temporal windows.

pub mod address;
pub mod error;
pub mod issuing_key;

pub use address::derive_issuing_address;
pub use error::IdentityError;
pub use issuing_key::{compare_issuing_address, ensure_valid_issuing_key};
