use std::sync::Arc;

use chainseal_chains::BlockchainDescriptor;
use chainseal_core::{LookupConfig, TransactionData};

use crate::backend::ExplorerBackend;
use crate::defaults::default_explorers;
use crate::error::ExplorerError;

/// Backends applicable to a chain: caller-supplied ones for the chain's
/// family merged with the built-in defaults, ordered by ascending priority.
/// The sort is stable, so custom backends outrank defaults of equal
/// priority.
pub fn explorers_for_chain(
    chain: &BlockchainDescriptor,
    custom: &[Arc<dyn ExplorerBackend>],
) -> Vec<Arc<dyn ExplorerBackend>> {
    let mut backends: Vec<Arc<dyn ExplorerBackend>> = custom
        .iter()
        .filter(|backend| backend.family() == chain.family)
        .cloned()
        .collect();
    backends.extend(default_explorers(chain));
    backends.sort_by_key(|backend| backend.priority());
    backends
}

/// Fetch the anchoring transaction under the configured quorum policy,
/// using the backends applicable to `chain`.
pub async fn look_for_tx(
    transaction_id: &str,
    chain: &BlockchainDescriptor,
    custom: &[Arc<dyn ExplorerBackend>],
    config: &LookupConfig,
) -> Result<TransactionData, ExplorerError> {
    let backends = explorers_for_chain(chain, custom);
    if backends.is_empty() {
        return Err(ExplorerError::Configuration(format!(
            "chain '{}' is not natively supported; supply custom explorer backends",
            chain.code
        )));
    }
    look_for_tx_with_backends(transaction_id, &backends, config).await
}

/// Fetch the anchoring transaction from an explicit backend list.
///
/// Backends are queried in order. A failing backend is skipped, not fatal;
/// the lookup succeeds as soon as `minimum_explorers` responses agree on
/// (`remote_hash`, `issuing_address`, `time`), and fails with a quorum error
/// once every backend has been exhausted. Configuration is validated per
/// call, before any network traffic: the available backend count depends on
/// the chain and on caller-supplied backends.
pub async fn look_for_tx_with_backends(
    transaction_id: &str,
    backends: &[Arc<dyn ExplorerBackend>],
    config: &LookupConfig,
) -> Result<TransactionData, ExplorerError> {
    if config.minimum_explorers == 0 || config.minimum_explorers > backends.len() {
        return Err(ExplorerError::Configuration(format!(
            "minimum_explorers is {} but {} backend(s) are available",
            config.minimum_explorers,
            backends.len(),
        )));
    }

    let lookup = run_lookup(transaction_id, backends, config.minimum_explorers);
    match config.timeout() {
        Some(deadline) => tokio::time::timeout(deadline, lookup)
            .await
            .map_err(|_| ExplorerError::Timeout)?,
        None => lookup.await,
    }
}

async fn run_lookup(
    transaction_id: &str,
    backends: &[Arc<dyn ExplorerBackend>],
    minimum: usize,
) -> Result<TransactionData, ExplorerError> {
    let client = reqwest::Client::new();
    let mut groups: Vec<(TransactionData, usize)> = Vec::new();

    for backend in backends {
        match backend.fetch(&client, transaction_id).await {
            Ok(data) => {
                tracing::debug!(backend = backend.name(), "explorer responded");
                if let Some(group) = groups.iter_mut().find(|(seen, _)| agrees(seen, &data)) {
                    group.1 += 1;
                    if group.1 >= minimum {
                        return Ok(group.0.clone());
                    }
                } else if minimum == 1 {
                    return Ok(data);
                } else {
                    groups.push((data, 1));
                }
            }
            Err(error) => {
                tracing::debug!(
                    backend = backend.name(),
                    error = %error,
                    "explorer failed, trying next"
                );
            }
        }
    }

    Err(ExplorerError::QuorumNotReached { required: minimum })
}

fn agrees(a: &TransactionData, b: &TransactionData) -> bool {
    a.remote_hash == b.remote_hash && a.issuing_address == b.issuing_address && a.time == b.time
}
