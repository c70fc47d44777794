use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

/// Blockchain family an explorer backend set is keyed on.
///
/// All Bitcoin-family networks (mainnet, testnet, regtest, mocknet) share one
/// backend set; all EVM networks (Ethereum nets, bloxberg, Arbitrum) share
/// the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChainFamily {
    Bitcoin,
    Ethereum,
}

/// Descriptor of one supported blockchain, drawn from the static registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockchainDescriptor {
    /// Registry key (e.g. "bitcoin", "ethmain", "arbitrumsepolia").
    pub code: &'static str,
    /// Human-readable chain name.
    pub name: &'static str,
    /// Short family identifier used inside anchors.
    pub blink_code: &'static str,
    /// Canonical lookup key composed from family name and network.
    pub signature_value: &'static str,
    /// Whether this is a test network (or the mocknet pseudo-chain).
    pub test: bool,
    /// Explorer family for transaction lookups.
    pub family: ChainFamily,
    /// Public explorer URL template for the anchoring transaction.
    pub transaction_template: &'static str,
}

/// The static blockchain registry.
///
/// `signature_value` is unique across entries; `by_signature_value` relies on
/// that to resolve to exactly one descriptor or none.
pub const BLOCKCHAINS: &[BlockchainDescriptor] = &[
    BlockchainDescriptor {
        code: "bitcoin",
        name: "Bitcoin",
        blink_code: "btc",
        signature_value: "bitcoinMainnet",
        test: false,
        family: ChainFamily::Bitcoin,
        transaction_template: "https://blockstream.info/tx/{transaction_id}",
    },
    BlockchainDescriptor {
        code: "testnet",
        name: "Bitcoin Testnet",
        blink_code: "btc",
        signature_value: "bitcoinTestnet",
        test: true,
        family: ChainFamily::Bitcoin,
        transaction_template: "https://blockstream.info/testnet/tx/{transaction_id}",
    },
    BlockchainDescriptor {
        code: "regtest",
        name: "Bitcoin Regtest",
        blink_code: "btc",
        signature_value: "bitcoinRegtest",
        test: true,
        family: ChainFamily::Bitcoin,
        transaction_template: "",
    },
    BlockchainDescriptor {
        code: "mocknet",
        name: "Mocknet",
        blink_code: "mocknet",
        signature_value: "mocknet",
        test: true,
        family: ChainFamily::Bitcoin,
        transaction_template: "",
    },
    BlockchainDescriptor {
        code: "ethmain",
        name: "Ethereum",
        blink_code: "eth",
        signature_value: "ethereumMainnet",
        test: false,
        family: ChainFamily::Ethereum,
        transaction_template: "https://etherscan.io/tx/{transaction_id}",
    },
    BlockchainDescriptor {
        code: "ethropst",
        name: "Ethereum Ropsten",
        blink_code: "eth",
        signature_value: "ethereumRopsten",
        test: true,
        family: ChainFamily::Ethereum,
        transaction_template: "https://ropsten.etherscan.io/tx/{transaction_id}",
    },
    BlockchainDescriptor {
        code: "ethrinkeby",
        name: "Ethereum Rinkeby",
        blink_code: "eth",
        signature_value: "ethereumRinkeby",
        test: true,
        family: ChainFamily::Ethereum,
        transaction_template: "https://rinkeby.etherscan.io/tx/{transaction_id}",
    },
    BlockchainDescriptor {
        code: "ethgoerli",
        name: "Ethereum Goerli",
        blink_code: "eth",
        signature_value: "ethereumGoerli",
        test: true,
        family: ChainFamily::Ethereum,
        transaction_template: "https://goerli.etherscan.io/tx/{transaction_id}",
    },
    BlockchainDescriptor {
        code: "ethsepolia",
        name: "Ethereum Sepolia",
        blink_code: "eth",
        signature_value: "ethereumSepolia",
        test: true,
        family: ChainFamily::Ethereum,
        transaction_template: "https://sepolia.etherscan.io/tx/{transaction_id}",
    },
    BlockchainDescriptor {
        code: "ethbloxberg",
        name: "bloxberg",
        blink_code: "eth",
        signature_value: "ethbloxberg",
        test: false,
        family: ChainFamily::Ethereum,
        transaction_template: "https://blockexplorer.bloxberg.org/tx/{transaction_id}",
    },
    BlockchainDescriptor {
        code: "arbitrumone",
        name: "Arbitrum One",
        blink_code: "eth",
        signature_value: "arbitrumOne",
        test: false,
        family: ChainFamily::Ethereum,
        transaction_template: "https://arbiscan.io/tx/{transaction_id}",
    },
    BlockchainDescriptor {
        code: "arbitrumsepolia",
        name: "Arbitrum Sepolia",
        blink_code: "eth",
        signature_value: "arbitrumSepolia",
        test: true,
        family: ChainFamily::Ethereum,
        transaction_template: "https://sepolia.arbiscan.io/tx/{transaction_id}",
    },
];

static BY_CODE: LazyLock<HashMap<&'static str, &'static BlockchainDescriptor>> =
    LazyLock::new(|| BLOCKCHAINS.iter().map(|chain| (chain.code, chain)).collect());

static BY_SIGNATURE: LazyLock<HashMap<&'static str, &'static BlockchainDescriptor>> =
    LazyLock::new(|| {
        BLOCKCHAINS
            .iter()
            .map(|chain| (chain.signature_value, chain))
            .collect()
    });

/// Look up a descriptor by its registry code.
pub fn by_code(code: &str) -> Option<&'static BlockchainDescriptor> {
    BY_CODE.get(code).copied()
}

/// Look up a descriptor by its signature value.
pub fn by_signature_value(signature_value: &str) -> Option<&'static BlockchainDescriptor> {
    BY_SIGNATURE.get(signature_value).copied()
}
