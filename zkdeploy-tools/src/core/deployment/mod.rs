// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::primitives::{Address, Bytes, TxHash, B256, U256};

use crate::{
    core::{
        artifact::Artifact, bridge::Funded, bytecode::BytecodeError, zksync::eip712::Eip712Error,
    },
    utils::color::DebugColor,
};

pub use constructor::encode_constructor_args;

mod constructor;

/// An artifact ready to publish, with its constructor input and bytecode hash already checked.
#[derive(Debug, Clone)]
pub struct PreparedDeployment {
    pub artifact: Artifact,
    pub bytecode_hash: B256,
    /// ABI-encoded constructor arguments.
    pub constructor_input: Bytes,
}

impl PreparedDeployment {
    /// Validates everything about the deployment that needs no network access.
    pub fn new(artifact: Artifact, constructor_args: &[String]) -> Result<Self, DeploymentError> {
        let constructor_input = encode_constructor_args(&artifact.abi, constructor_args)?;
        let bytecode_hash = artifact.bytecode_hash()?;
        Ok(Self {
            artifact,
            bytecode_hash,
            constructor_input,
        })
    }
}

/// Reference to a contract once its deployment is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
    pub tx_hash: TxHash,
    pub gas_used: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GasEstimate {
    pub gas_limit: u64,
    pub gas_price: u128,
}

impl GasEstimate {
    /// Upper bound of the fee paid for the transaction, in wei.
    pub fn fee(&self) -> U256 {
        U256::from(self.gas_limit) * U256::from(self.gas_price)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("{0}")]
    Pending(#[from] alloy::providers::PendingTransactionError),
    #[error("{0}")]
    Bytecode(#[from] BytecodeError),
    #[error("{0}")]
    Eip712(#[from] Eip712Error),

    #[error("deployment failed during gas estimation: {0}")]
    GasEstimationFailure(String),
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing address: {0}")]
    NoContractAddress(String),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
}

/// Publishes compiled artifacts on the target network.
#[allow(async_fn_in_trait)]
pub trait ContractDeployer {
    /// Estimates the deployment without submitting anything.
    async fn estimate_deployment(
        &self,
        deployment: &PreparedDeployment,
    ) -> Result<GasEstimate, DeploymentError>;

    /// Submits the deployment and waits for its receipt.
    async fn deploy(
        &self,
        deployment: &PreparedDeployment,
        funded: &Funded,
    ) -> Result<DeployedContract, DeploymentError>;
}
