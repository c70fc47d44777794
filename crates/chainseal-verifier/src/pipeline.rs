/// Steps of the proof-verification pipeline, in execution order.
///
/// The pipeline is data: a single driver loop executes these in order, which
/// keeps the step-name lists introspectable without re-running anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofStep {
    AssertProofValidity,
    GetTransactionId,
    ComputeLocalHash,
    FetchRemoteHash,
    CompareHashes,
    CheckMerkleRoot,
    CheckReceipt,
}

impl ProofStep {
    pub const ALL: [ProofStep; 7] = [
        ProofStep::AssertProofValidity,
        ProofStep::GetTransactionId,
        ProofStep::ComputeLocalHash,
        ProofStep::FetchRemoteHash,
        ProofStep::CompareHashes,
        ProofStep::CheckMerkleRoot,
        ProofStep::CheckReceipt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProofStep::AssertProofValidity => "assert_proof_validity",
            ProofStep::GetTransactionId => "get_transaction_id",
            ProofStep::ComputeLocalHash => "compute_local_hash",
            ProofStep::FetchRemoteHash => "fetch_remote_hash",
            ProofStep::CompareHashes => "compare_hashes",
            ProofStep::CheckMerkleRoot => "check_merkle_root",
            ProofStep::CheckReceipt => "check_receipt",
        }
    }
}

/// Steps of the identity-verification pipeline, run only when requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityStep {
    DeriveIssuingAddress,
    EnsureVerificationMethodValidity,
    CompareIssuingAddress,
}

impl IdentityStep {
    pub const ALL: [IdentityStep; 3] = [
        IdentityStep::DeriveIssuingAddress,
        IdentityStep::EnsureVerificationMethodValidity,
        IdentityStep::CompareIssuingAddress,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IdentityStep::DeriveIssuingAddress => "derive_issuing_address",
            IdentityStep::EnsureVerificationMethodValidity => {
                "ensure_verification_method_validity"
            }
            IdentityStep::CompareIssuingAddress => "compare_issuing_address",
        }
    }
}
