use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use chainseal_chains::ChainFamily;
use chainseal_core::TransactionData;

use crate::error::ExplorerError;
use crate::parsers;

/// One explorer service able to report transaction data.
///
/// Backends are ranked by ascending `priority` (lower is tried first).
/// Caller-supplied backends merge with the built-in defaults for the chain's
/// family.
#[async_trait]
pub trait ExplorerBackend: Send + Sync {
    /// Service name, for diagnostics.
    fn name(&self) -> &str;
    /// Rank within the backend set; lower runs earlier.
    fn priority(&self) -> u32;
    /// Chain family this backend serves.
    fn family(&self) -> ChainFamily;
    /// Fetch and normalize the transaction.
    async fn fetch(
        &self,
        client: &Client,
        transaction_id: &str,
    ) -> Result<TransactionData, ExplorerError>;
}

async fn get_json(client: &Client, url: &str) -> Result<Value, ExplorerError> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.json().await?)
}

/// Esplora-style REST API (blockstream.info, mempool.space).
pub struct EsploraApi {
    name: &'static str,
    base_url: String,
    priority: u32,
}

impl EsploraApi {
    pub fn new(name: &'static str, base_url: impl Into<String>, priority: u32) -> Self {
        Self {
            name,
            base_url: base_url.into(),
            priority,
        }
    }
}

#[async_trait]
impl ExplorerBackend for EsploraApi {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn family(&self) -> ChainFamily {
        ChainFamily::Bitcoin
    }

    async fn fetch(
        &self,
        client: &Client,
        transaction_id: &str,
    ) -> Result<TransactionData, ExplorerError> {
        let url = format!("{}/tx/{}", self.base_url, transaction_id);
        let body = get_json(client, &url).await?;
        parsers::parse_esplora(&body)
    }
}

/// Blockcypher REST API; serves both the Bitcoin and Ethereum chains.
pub struct BlockcypherApi {
    family: ChainFamily,
    base_url: String,
    priority: u32,
}

impl BlockcypherApi {
    pub fn bitcoin(base_url: impl Into<String>, priority: u32) -> Self {
        Self {
            family: ChainFamily::Bitcoin,
            base_url: base_url.into(),
            priority,
        }
    }

    pub fn ethereum(base_url: impl Into<String>, priority: u32) -> Self {
        Self {
            family: ChainFamily::Ethereum,
            base_url: base_url.into(),
            priority,
        }
    }
}

#[async_trait]
impl ExplorerBackend for BlockcypherApi {
    fn name(&self) -> &str {
        "blockcypher"
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn family(&self) -> ChainFamily {
        self.family
    }

    async fn fetch(
        &self,
        client: &Client,
        transaction_id: &str,
    ) -> Result<TransactionData, ExplorerError> {
        let url = format!("{}/txs/{}?limit=500", self.base_url, transaction_id);
        let body = get_json(client, &url).await?;
        match self.family {
            ChainFamily::Bitcoin => parsers::parse_blockcypher_btc(&body),
            ChainFamily::Ethereum => parsers::parse_blockcypher_eth(&body),
        }
    }
}

/// Etherscan-compatible proxy API (etherscan.io, arbiscan.io).
///
/// The proxy endpoint exposes raw JSON-RPC objects, so the confirmation time
/// requires a second call for the enclosing block.
pub struct EtherscanApi {
    name: &'static str,
    base_url: String,
    api_key: Option<String>,
    priority: u32,
}

impl EtherscanApi {
    pub fn new(name: &'static str, base_url: impl Into<String>, priority: u32) -> Self {
        Self {
            name,
            base_url: base_url.into(),
            api_key: None,
            priority,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn key_suffix(&self) -> String {
        self.api_key
            .as_deref()
            .map(|key| format!("&apikey={key}"))
            .unwrap_or_default()
    }
}

#[async_trait]
impl ExplorerBackend for EtherscanApi {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn family(&self) -> ChainFamily {
        ChainFamily::Ethereum
    }

    async fn fetch(
        &self,
        client: &Client,
        transaction_id: &str,
    ) -> Result<TransactionData, ExplorerError> {
        let tx_url = format!(
            "{}?module=proxy&action=eth_getTransactionByHash&txhash={}{}",
            self.base_url,
            transaction_id,
            self.key_suffix()
        );
        let tx = get_json(client, &tx_url).await?;
        let block_number = tx
            .pointer("/result/blockNumber")
            .and_then(Value::as_str)
            .ok_or_else(|| ExplorerError::Parse("transaction has no block number".into()))?
            .to_string();

        let block_url = format!(
            "{}?module=proxy&action=eth_getBlockByNumber&tag={}&boolean=false{}",
            self.base_url,
            block_number,
            self.key_suffix()
        );
        let block = get_json(client, &block_url).await?;
        parsers::parse_rpc_transaction(&tx, &block)
    }
}

/// Blockscout transaction API (blockexplorer.bloxberg.org).
pub struct BlockscoutApi {
    name: &'static str,
    base_url: String,
    priority: u32,
}

impl BlockscoutApi {
    pub fn new(name: &'static str, base_url: impl Into<String>, priority: u32) -> Self {
        Self {
            name,
            base_url: base_url.into(),
            priority,
        }
    }
}

#[async_trait]
impl ExplorerBackend for BlockscoutApi {
    fn name(&self) -> &str {
        self.name
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn family(&self) -> ChainFamily {
        ChainFamily::Ethereum
    }

    async fn fetch(
        &self,
        client: &Client,
        transaction_id: &str,
    ) -> Result<TransactionData, ExplorerError> {
        let url = format!(
            "{}?module=transaction&action=gettxinfo&txhash={}",
            self.base_url, transaction_id
        );
        let body = get_json(client, &url).await?;
        parsers::parse_blockscout(&body)
    }
}
