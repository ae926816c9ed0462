// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Test doubles for the network and artifact seams.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
};

use alloy::{
    primitives::{keccak256, Address, Bloom, Bytes, TxHash, B256},
    rpc::types::Log,
};
use serde_json::json;

use crate::core::{
    artifact::{Artifact, ArtifactError, ArtifactSource, ZKSOLC_ARTIFACT_FORMAT},
    bridge::{Bridge, BridgeError, DepositRequest, Funded, PendingDeposit},
    deployment::{
        ContractDeployer, DeployedContract, DeploymentError, GasEstimate, PreparedDeployment,
    },
    identity::Identity,
    network::{Connect, NetworkError},
};

/// A call observed by [`MockNetwork`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect(Address),
    Deposit(DepositRequest),
    WaitFinalized(TxHash),
    Estimate {
        contract: String,
        constructor_input: Bytes,
    },
    Deploy {
        contract: String,
        constructor_input: Bytes,
        funded_by: TxHash,
    },
}

/// In-memory network that records every call in order.
///
/// Clones share the call log and the nonce counter, so consecutive runs against clones of one
/// network deploy to distinct addresses.
#[derive(Debug, Clone, Default)]
pub struct MockNetwork {
    calls: Arc<Mutex<Vec<Call>>>,
    nonce: Arc<AtomicU64>,
    fail_finality: bool,
}

impl MockNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every deposit fail on L2.
    pub fn failing_finality(mut self) -> Self {
        self.fail_finality = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: Call) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }

    fn next_nonce(&self) -> u64 {
        self.nonce.fetch_add(1, Ordering::SeqCst)
    }
}

impl Connect for MockNetwork {
    type Session = MockSession;

    fn connect(&self, identity: &Identity) -> Result<MockSession, NetworkError> {
        self.record(Call::Connect(identity.address()));
        Ok(MockSession {
            account: identity.address(),
            network: self.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MockSession {
    account: Address,
    network: MockNetwork,
}

impl Bridge for MockSession {
    async fn deposit(&self, request: DepositRequest) -> Result<PendingDeposit, BridgeError> {
        self.network.record(Call::Deposit(request.clone()));
        let nonce = self.network.next_nonce();
        Ok(PendingDeposit {
            l1_tx_hash: keccak256(nonce.to_be_bytes()),
            to: request.to,
            amount: request.amount,
        })
    }

    async fn wait_finalized(&self, pending: PendingDeposit) -> Result<Funded, BridgeError> {
        self.network.record(Call::WaitFinalized(pending.l1_tx_hash));
        let l2_tx_hash = keccak256(pending.l1_tx_hash);
        if self.network.fail_finality {
            return Err(BridgeError::L2Failed(l2_tx_hash));
        }
        Ok(Funded::new(l2_tx_hash, pending.to, pending.amount))
    }
}

impl ContractDeployer for MockSession {
    async fn estimate_deployment(
        &self,
        deployment: &PreparedDeployment,
    ) -> Result<GasEstimate, DeploymentError> {
        self.network.record(Call::Estimate {
            contract: deployment.artifact.contract_name.clone(),
            constructor_input: deployment.constructor_input.clone(),
        });
        Ok(GasEstimate {
            gas_limit: 1_000_000,
            gas_price: 250_000_000,
        })
    }

    async fn deploy(
        &self,
        deployment: &PreparedDeployment,
        funded: &Funded,
    ) -> Result<DeployedContract, DeploymentError> {
        self.network.record(Call::Deploy {
            contract: deployment.artifact.contract_name.clone(),
            constructor_input: deployment.constructor_input.clone(),
            funded_by: funded.l2_tx_hash(),
        });
        let nonce = self.network.next_nonce();
        Ok(DeployedContract {
            address: self.account.create(nonce),
            tx_hash: keccak256(B256::left_padding_from(&nonce.to_be_bytes())),
            gas_used: 900_000,
        })
    }
}

/// Artifacts held in memory, keyed by both bare and fully qualified name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifacts {
    artifacts: BTreeMap<String, Artifact>,
}

impl InMemoryArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, artifact: Artifact) -> Self {
        self.artifacts
            .insert(artifact.fully_qualified_name(), artifact.clone());
        self.artifacts
            .insert(artifact.contract_name.clone(), artifact);
        self
    }
}

impl ArtifactSource for InMemoryArtifacts {
    fn load_artifact(&self, name: &str) -> Result<Artifact, ArtifactError> {
        self.artifacts
            .get(name)
            .cloned()
            .ok_or_else(|| ArtifactError::NotFound(name.to_owned()))
    }
}

/// JSON of a zksolc hardhat artifact with an `(address, uint256)` constructor.
///
/// The bytecode is a single word derived from the fully qualified name, so every contract gets a
/// distinct, valid bytecode hash. `deps` are fully qualified names of factory dependencies.
pub fn artifact_json(source: &str, name: &str, deps: &[&str]) -> serde_json::Value {
    let bytecode = keccak256(format!("{source}:{name}"));
    let factory_deps: BTreeMap<String, String> = deps
        .iter()
        .map(|dep| (keccak256(dep).to_string(), (*dep).to_owned()))
        .collect();
    json!({
        "_format": ZKSOLC_ARTIFACT_FORMAT,
        "contractName": name,
        "sourceName": source,
        "abi": [{
            "type": "constructor",
            "inputs": [
                { "name": "operator", "type": "address", "internalType": "address" },
                { "name": "fee", "type": "uint256", "internalType": "uint256" }
            ],
            "stateMutability": "nonpayable"
        }],
        "bytecode": bytecode.to_string(),
        "deployedBytecode": bytecode.to_string(),
        "linkReferences": {},
        "deployedLinkReferences": {},
        "factoryDeps": factory_deps,
    })
}

/// Writes [`artifact_json`] to `<root>/<source>/<name>.json`.
pub fn write_artifact(
    root: &Path,
    source: &str,
    name: &str,
    deps: &[&str],
) -> std::io::Result<PathBuf> {
    let dir = root.join(source);
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{name}.json"));
    fs::write(
        &path,
        serde_json::to_vec_pretty(&artifact_json(source, name, deps))?,
    )?;
    Ok(path)
}

/// Parsed form of [`artifact_json`].
pub fn artifact(source: &str, name: &str) -> Artifact {
    let value = artifact_json(source, name, &[]);
    serde_json::from_value(value).unwrap_or_else(|err| panic!("invalid test artifact: {err}"))
}

/// JSON-RPC receipt of a mined transaction, as returned by `eth_getTransactionReceipt`.
pub fn receipt_json(tx_hash: TxHash, success: bool, logs: &[Log]) -> serde_json::Value {
    json!({
        "type": "0x2",
        "status": if success { "0x1" } else { "0x0" },
        "cumulativeGasUsed": "0xdbba0",
        "logs": logs,
        "logsBloom": Bloom::ZERO,
        "transactionHash": tx_hash,
        "transactionIndex": "0x0",
        "blockHash": B256::repeat_byte(0xbb),
        "blockNumber": "0x1",
        "gasUsed": "0xdbba0",
        "effectiveGasPrice": "0xee6b280",
        "from": Address::ZERO,
        "to": Address::ZERO,
        "contractAddress": null,
    })
}
