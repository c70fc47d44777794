//! Chainseal Chains — Static blockchain registry and anchor resolution.

pub mod error;
pub mod registry;
pub mod resolver;

pub use error::ChainError;
pub use registry::{by_code, by_signature_value, BlockchainDescriptor, ChainFamily, BLOCKCHAINS};
pub use resolver::{get_chain, is_mock_chain, is_transaction_id_valid, transaction_id};
