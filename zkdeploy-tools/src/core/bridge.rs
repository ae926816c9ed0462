// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! L1 → L2 deposits of the base token.

use alloy::primitives::{Address, TxHash, U256};

use crate::{
    core::network::NetworkError,
    utils::color::{Color, DebugColor},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepositRequest {
    /// L2 account credited with the deposit.
    pub to: Address,
    /// Token to bridge; only the base token is supported.
    pub token: Address,
    pub amount: U256,
}

/// A deposit submitted on L1 whose L2 execution has not been observed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDeposit {
    pub l1_tx_hash: TxHash,
    pub to: Address,
    pub amount: U256,
}

/// Proof that a deposit was executed on L2.
///
/// Deploying requires one of these, which orders every deployment after the funding it pays with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Funded {
    l2_tx_hash: TxHash,
    account: Address,
    amount: U256,
}

impl Funded {
    pub fn new(l2_tx_hash: TxHash, account: Address, amount: U256) -> Self {
        Self {
            l2_tx_hash,
            account,
            amount,
        }
    }

    pub fn l2_tx_hash(&self) -> TxHash {
        self.l2_tx_hash
    }

    pub fn account(&self) -> Address {
        self.account
    }

    pub fn amount(&self) -> U256 {
        self.amount
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("rpc error: {0}")]
    Rpc(#[from] alloy::transports::RpcError<alloy::transports::TransportErrorKind>),
    #[error("contract error: {0}")]
    Contract(#[from] alloy::contract::Error),
    #[error("{0}")]
    Pending(#[from] alloy::providers::PendingTransactionError),
    #[error("{0}")]
    Network(#[from] NetworkError),

    #[error("only the base token can be deposited, got {}", .0.red())]
    UnsupportedToken(Address),
    #[error("deposit tx reverted on L1 {}", .0.debug_red())]
    L1Reverted(TxHash),
    #[error("no priority request found in deposit tx {}", .0.debug_red())]
    MissingPriorityRequest(TxHash),
    #[error("deposit failed on L2 {}", .0.debug_red())]
    L2Failed(TxHash),
}

/// Moves funds from the companion (L1) network into the target network.
#[allow(async_fn_in_trait)]
pub trait Bridge {
    /// Submits the deposit on L1. No retries.
    async fn deposit(&self, request: DepositRequest) -> Result<PendingDeposit, BridgeError>;

    /// Blocks until the deposit is executed on L2.
    async fn wait_finalized(&self, pending: PendingDeposit) -> Result<Funded, BridgeError>;
}
