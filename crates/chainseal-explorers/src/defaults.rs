use std::sync::Arc;

use chainseal_chains::{BlockchainDescriptor, ChainFamily};

use crate::backend::{BlockcypherApi, BlockscoutApi, EsploraApi, EtherscanApi, ExplorerBackend};

/// Built-in explorer backends for a chain, ordered by ascending priority.
///
/// Bitcoin-family networks share one backend set, switched between mainnet
/// and testnet endpoints; EVM networks get the Etherscan-compatible service
/// for their specific network. Pseudo-chains with no public explorer
/// (mocknet, regtest) still report the testnet set so configuration
/// validation behaves uniformly; the orchestrator never queries them.
pub fn default_explorers(chain: &BlockchainDescriptor) -> Vec<Arc<dyn ExplorerBackend>> {
    match chain.code {
        "ethbloxberg" => vec![Arc::new(BlockscoutApi::new(
            "bloxberg",
            "https://blockexplorer.bloxberg.org/api",
            1,
        ))],
        "arbitrumone" => vec![Arc::new(EtherscanApi::new(
            "arbiscan",
            "https://api.arbiscan.io/api",
            1,
        ))],
        "arbitrumsepolia" => vec![Arc::new(EtherscanApi::new(
            "arbiscan-sepolia",
            "https://api-sepolia.arbiscan.io/api",
            1,
        ))],
        "ethmain" => vec![
            Arc::new(EtherscanApi::new("etherscan", "https://api.etherscan.io/api", 1)),
            Arc::new(BlockcypherApi::ethereum("https://api.blockcypher.com/v1/eth/main", 2)),
        ],
        "ethropst" => etherscan_only("etherscan-ropsten", "https://api-ropsten.etherscan.io/api"),
        "ethrinkeby" => etherscan_only("etherscan-rinkeby", "https://api-rinkeby.etherscan.io/api"),
        "ethgoerli" => etherscan_only("etherscan-goerli", "https://api-goerli.etherscan.io/api"),
        "ethsepolia" => etherscan_only("etherscan-sepolia", "https://api-sepolia.etherscan.io/api"),
        "bitcoin" => vec![
            Arc::new(BlockcypherApi::bitcoin("https://api.blockcypher.com/v1/btc/main", 1)),
            Arc::new(EsploraApi::new("blockstream", "https://blockstream.info/api", 2)),
            Arc::new(EsploraApi::new("mempool.space", "https://mempool.space/api", 3)),
        ],
        _ if chain.family == ChainFamily::Bitcoin => vec![
            Arc::new(BlockcypherApi::bitcoin("https://api.blockcypher.com/v1/btc/test3", 1)),
            Arc::new(EsploraApi::new("blockstream", "https://blockstream.info/testnet/api", 2)),
            Arc::new(EsploraApi::new("mempool.space", "https://mempool.space/testnet/api", 3)),
        ],
        _ => Vec::new(),
    }
}

fn etherscan_only(name: &'static str, base_url: &str) -> Vec<Arc<dyn ExplorerBackend>> {
    vec![Arc::new(EtherscanApi::new(name, base_url, 1))]
}
