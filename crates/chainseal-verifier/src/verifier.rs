use std::sync::Arc;

use serde_json::Value;

use chainseal_chains::{get_chain, transaction_id, BlockchainDescriptor};
use chainseal_codec::{decode, ensure_hashes_equal, ensure_merkle_root, ensure_valid_receipt};
use chainseal_core::{
    DecodedProof, Proof, TransactionData, VerificationOptions, VerificationResult,
    MERKLE_PROOF_2019,
};
use chainseal_explorers::{look_for_tx, ExplorerBackend};
use chainseal_identity::{compare_issuing_address, derive_issuing_address, ensure_valid_issuing_key};
use chainseal_jsonld::{compute_local_hash_with_fallback, Canonicalizer};

use crate::error::VerifyError;
use crate::pipeline::{IdentityStep, ProofStep};

/// Side channel invoked after each pipeline step with the step name and its
/// outcome.
pub type StepObserver = dyn Fn(&'static str, Result<(), &VerifyError>) + Send + Sync;

/// Verifies one credential carrying a MerkleProof2019 proof.
///
/// Each `verify_proof` call owns its pipeline state, so a verifier can be
/// shared across concurrent verifications.
pub struct MerkleProofVerifier {
    document: Value,
    options: VerificationOptions,
    canonicalizer: Arc<dyn Canonicalizer>,
    explorers: Vec<Arc<dyn ExplorerBackend>>,
    observer: Option<Box<StepObserver>>,
    verification_method: String,
}

#[derive(Default)]
struct PipelineState {
    target_proof: Option<Proof>,
    decoded: Option<DecodedProof>,
    transaction_id: Option<String>,
    local_hash: Option<String>,
    chain: Option<&'static BlockchainDescriptor>,
    remote_hash: Option<String>,
    tx_data: Option<TransactionData>,
    derived_address: Option<String>,
}

impl PipelineState {
    fn decoded(&self) -> Result<&DecodedProof, VerifyError> {
        self.decoded
            .as_ref()
            .ok_or(VerifyError::MissingState("decoded proof"))
    }

    fn local_hash(&self) -> Result<&str, VerifyError> {
        self.local_hash
            .as_deref()
            .ok_or(VerifyError::MissingState("local hash"))
    }

    fn remote_hash(&self) -> Result<&str, VerifyError> {
        self.remote_hash
            .as_deref()
            .ok_or(VerifyError::MissingState("remote hash"))
    }

    fn chain(&self) -> Result<&'static BlockchainDescriptor, VerifyError> {
        self.chain.ok_or(VerifyError::MissingState("chain"))
    }

    fn tx_data(&self) -> Result<&TransactionData, VerifyError> {
        self.tx_data
            .as_ref()
            .ok_or(VerifyError::MissingTransactionData)
    }
}

impl MerkleProofVerifier {
    /// Create a verifier for a credential document.
    ///
    /// The document is cloned and never mutated. Fails only on call-time
    /// argument errors; everything else surfaces through `verify_proof`.
    pub fn new(
        document: &Value,
        canonicalizer: Arc<dyn Canonicalizer>,
    ) -> Result<Self, VerifyError> {
        if !document.is_object() {
            return Err(VerifyError::InvalidDocument(
                "credential must be a JSON object".into(),
            ));
        }
        let verification_method = merkle_proofs(document)
            .last()
            .map(|proof| proof.verification_method.clone())
            .unwrap_or_default();
        Ok(Self {
            document: document.clone(),
            options: VerificationOptions::default(),
            canonicalizer,
            explorers: Vec::new(),
            observer: None,
            verification_method,
        })
    }

    /// Set the verification options.
    pub fn with_options(mut self, options: VerificationOptions) -> Self {
        self.options = options;
        self
    }

    /// Add custom explorer backends, merged with the built-in defaults.
    pub fn with_explorers(mut self, explorers: Vec<Arc<dyn ExplorerBackend>>) -> Self {
        self.explorers = explorers;
        self
    }

    /// Install a step observer invoked with `(step_name, outcome)` after
    /// each executed step.
    pub fn with_step_observer(
        mut self,
        observer: impl Fn(&'static str, Result<(), &VerifyError>) + Send + Sync + 'static,
    ) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Names of the proof pipeline steps, in execution order.
    pub fn proof_steps() -> Vec<&'static str> {
        ProofStep::ALL.iter().map(|step| step.name()).collect()
    }

    /// Names of the identity pipeline steps, in execution order.
    pub fn identity_steps() -> Vec<&'static str> {
        IdentityStep::ALL.iter().map(|step| step.name()).collect()
    }

    /// Run the verification pipeline to completion.
    ///
    /// Steps execute strictly in order; the first failing step aborts the
    /// pipeline and its message becomes the result's error. The identity
    /// pipeline runs only when `verify_identity` is set, and both pipelines
    /// must succeed for an overall pass.
    pub async fn verify_proof(&self) -> VerificationResult {
        let mut state = PipelineState::default();

        for step in ProofStep::ALL {
            let result = self.run_proof_step(step, &mut state).await;
            self.notify(step.name(), &result);
            if let Err(error) = result {
                tracing::debug!(step = step.name(), error = %error, "proof pipeline failed");
                return VerificationResult::failed(self.verification_method.as_str(), error);
            }
        }

        if self.options.verify_identity {
            for step in IdentityStep::ALL {
                let result = self.run_identity_step(step, &mut state);
                self.notify(step.name(), &result);
                if let Err(error) = result {
                    tracing::debug!(step = step.name(), error = %error, "identity pipeline failed");
                    return VerificationResult::failed(self.verification_method.as_str(), error);
                }
            }
        }

        VerificationResult::passed(self.verification_method.as_str())
    }

    async fn run_proof_step(
        &self,
        step: ProofStep,
        state: &mut PipelineState,
    ) -> Result<(), VerifyError> {
        match step {
            ProofStep::AssertProofValidity => {
                let proof = merkle_proofs(&self.document)
                    .into_iter()
                    .last()
                    .ok_or(VerifyError::UnsignedDocument)?;
                state.decoded = Some(decode(&proof)?);
                state.target_proof = Some(proof);
                Ok(())
            }
            ProofStep::GetTransactionId => {
                let tx_id = transaction_id(state.decoded()?)?;
                state.transaction_id = Some(tx_id);
                Ok(())
            }
            ProofStep::ComputeLocalHash => {
                let hash = compute_local_hash_with_fallback(
                    &self.document,
                    state.target_proof.as_ref(),
                    self.canonicalizer.as_ref(),
                )
                .await?;
                state.local_hash = Some(hash);
                Ok(())
            }
            ProofStep::FetchRemoteHash => {
                let decoded = state.decoded()?.clone();
                let chain = get_chain(Some(&decoded))?.ok_or(VerifyError::UnresolvedChain)?;
                state.chain = Some(chain);
                if matches!(chain.code, "mocknet" | "regtest") {
                    // Local pseudo-chains have no public explorer; the
                    // decoded root stands in for the on-chain value.
                    state.remote_hash = Some(decoded.merkle_root.clone());
                } else {
                    let tx_id = state
                        .transaction_id
                        .as_deref()
                        .ok_or(VerifyError::MissingState("transaction id"))?;
                    let data =
                        look_for_tx(tx_id, chain, &self.explorers, &self.options.lookup).await?;
                    state.remote_hash = Some(data.remote_hash.clone());
                    state.tx_data = Some(data);
                }
                Ok(())
            }
            ProofStep::CompareHashes => {
                let decoded = state.decoded()?;
                ensure_hashes_equal(state.local_hash()?, &decoded.target_hash)?;
                Ok(())
            }
            ProofStep::CheckMerkleRoot => {
                let decoded = state.decoded()?;
                ensure_merkle_root(&decoded.path, &decoded.target_hash, &decoded.merkle_root)?;
                Ok(())
            }
            ProofStep::CheckReceipt => {
                ensure_valid_receipt(state.decoded()?, state.remote_hash()?)?;
                Ok(())
            }
        }
    }

    fn run_identity_step(
        &self,
        step: IdentityStep,
        state: &mut PipelineState,
    ) -> Result<(), VerifyError> {
        match step {
            IdentityStep::DeriveIssuingAddress => {
                let public_key = self
                    .options
                    .issuer_public_key
                    .as_deref()
                    .ok_or(VerifyError::MissingIssuerPublicKey)?;
                let address = derive_issuing_address(public_key, state.chain()?)?;
                state.derived_address = Some(address);
                Ok(())
            }
            IdentityStep::EnsureVerificationMethodValidity => {
                let data = state.tx_data()?;
                ensure_valid_issuing_key(
                    &self.options.issuer_key_map,
                    &data.issuing_address,
                    data.time,
                )?;
                Ok(())
            }
            IdentityStep::CompareIssuingAddress => {
                let derived = state
                    .derived_address
                    .as_deref()
                    .ok_or(VerifyError::MissingState("derived address"))?;
                compare_issuing_address(derived, &state.tx_data()?.issuing_address)?;
                Ok(())
            }
        }
    }

    fn notify(&self, step: &'static str, result: &Result<(), VerifyError>) {
        if let Some(observer) = &self.observer {
            observer(step, result.as_ref().map(|_| ()));
        }
    }
}

/// MerkleProof2019 proofs attached to the document, oldest first.
///
/// A `ChainedProof2021` whose chained type is MerkleProof2019 counts as a
/// carrier of one.
pub fn merkle_proofs(document: &Value) -> Vec<Proof> {
    let candidates: Vec<&Value> = match document.get("proof") {
        Some(Value::Array(list)) => list.iter().collect(),
        Some(single) => vec![single],
        None => Vec::new(),
    };
    candidates
        .into_iter()
        .filter(|value| is_merkle_proof(value))
        .filter_map(|value| serde_json::from_value(value.clone()).ok())
        .collect()
}

fn is_merkle_proof(value: &Value) -> bool {
    match value.get("type").and_then(Value::as_str) {
        Some(MERKLE_PROOF_2019) => true,
        Some("ChainedProof2021") => {
            value.get("chainedProofType").and_then(Value::as_str) == Some(MERKLE_PROOF_2019)
        }
        _ => false,
    }
}
