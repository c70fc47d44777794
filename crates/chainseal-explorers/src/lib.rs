//! Chainseal Explorers — Fetches anchoring transactions from ranked explorer
//! backends under a quorum policy.
//!
//! Transaction data comes from untrusted services, so it is only trusted
//! once `minimum_explorers` independent backends agree on it.

pub mod backend;
pub mod defaults;
pub mod error;
pub mod lookup;
pub mod parsers;

pub use backend::{BlockcypherApi, BlockscoutApi, EsploraApi, EtherscanApi, ExplorerBackend};
pub use defaults::default_explorers;
pub use error::ExplorerError;
pub use lookup::{explorers_for_chain, look_for_tx, look_for_tx_with_backends};
