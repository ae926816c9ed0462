// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    eips::eip1559::Eip1559Estimation,
    network::{ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, TxHash, U256},
    providers::Provider,
    rpc::types::{Log, TransactionRequest},
    sol_types::SolCall,
};

use super::{
    contracts::{addresses, IMailbox},
    CallRequest, Eip712Meta, ZkSyncClient,
};
use crate::{
    core::{
        bridge::{Bridge, BridgeError, DepositRequest, Funded, PendingDeposit},
        network::wait_for_receipt,
    },
    utils::{color::DebugColor, format_eth},
};

/// Gas per pubdata byte required for L1 → L2 transactions.
pub const REQUIRED_L1_TO_L2_GAS_PER_PUBDATA_LIMIT: u64 = 800;

/// L1 pricing of a deposit.
///
/// The L2 base cost is quoted at `max_fee_per_gas`, the same cap the request transaction
/// carries, so the value sent always covers the cost the Mailbox charges.
#[derive(Debug, Clone, Copy)]
struct DepositQuote {
    l2_gas_limit: U256,
    fees: Eip1559Estimation,
}

impl DepositQuote {
    fn base_cost_call(&self) -> IMailbox::l2TransactionBaseCostCall {
        IMailbox::l2TransactionBaseCostCall {
            _gasPrice: U256::from(self.fees.max_fee_per_gas),
            _l2GasLimit: self.l2_gas_limit,
            _l2GasPerPubdataByteLimit: U256::from(REQUIRED_L1_TO_L2_GAS_PER_PUBDATA_LIMIT),
        }
    }

    /// The `requestL2Transaction` call paying `base_cost` on top of the deposited amount.
    fn request_tx(
        &self,
        main_contract: Address,
        request: &DepositRequest,
        refund_recipient: Address,
        base_cost: U256,
    ) -> TransactionRequest {
        let call = IMailbox::requestL2TransactionCall {
            _contractL2: request.to,
            _l2Value: request.amount,
            _calldata: Bytes::new(),
            _l2GasLimit: self.l2_gas_limit,
            _l2GasPerPubdataByteLimit: U256::from(REQUIRED_L1_TO_L2_GAS_PER_PUBDATA_LIMIT),
            _factoryDeps: vec![],
            _refundRecipient: refund_recipient,
        };
        TransactionRequest::default()
            .with_to(main_contract)
            .with_input(call.abi_encode())
            .with_value(base_cost + request.amount)
            .with_max_fee_per_gas(self.fees.max_fee_per_gas)
            .with_max_priority_fee_per_gas(self.fees.max_priority_fee_per_gas)
    }
}

impl Bridge for ZkSyncClient {
    async fn deposit(&self, request: DepositRequest) -> Result<PendingDeposit, BridgeError> {
        if request.token != addresses::ETH {
            return Err(BridgeError::UnsupportedToken(request.token));
        }

        let l1 = self.l1()?;
        let main_contract = self.main_contract().await?;
        debug!(@grey, "zkSync main contract: {}", main_contract.debug_lavender());

        let l2_gas_limit = self
            .estimate_l1_to_l2(CallRequest {
                from: self.address(),
                to: request.to,
                data: Bytes::new(),
                value: request.amount,
                transaction_type: None,
                eip712_meta: Eip712Meta {
                    gas_per_pubdata: U256::from(REQUIRED_L1_TO_L2_GAS_PER_PUBDATA_LIMIT),
                    factory_deps: vec![],
                },
            })
            .await?;
        let quote = DepositQuote {
            l2_gas_limit,
            fees: l1.estimate_eip1559_fees().await?,
        };

        let mailbox = IMailbox::new(main_contract, l1);
        let base_cost = mailbox
            .call_builder(&quote.base_cost_call())
            .call()
            .await?;
        debug!(@grey, "L2 base cost: {}", format_eth(base_cost));

        let tx = quote.request_tx(main_contract, &request, self.address(), base_cost);
        let pending = l1.send_transaction(tx).await?;
        let l1_tx_hash = *pending.tx_hash();
        info!(@grey, "deposit tx hash: {}", l1_tx_hash.debug_lavender());

        Ok(PendingDeposit {
            l1_tx_hash,
            to: request.to,
            amount: request.amount,
        })
    }

    async fn wait_finalized(&self, pending: PendingDeposit) -> Result<Funded, BridgeError> {
        let receipt = wait_for_receipt(self.l1()?, pending.l1_tx_hash, self.poll_interval).await?;
        if !receipt.status() {
            return Err(BridgeError::L1Reverted(pending.l1_tx_hash));
        }

        let main_contract = self.main_contract().await?;
        let l2_tx_hash = priority_tx_hash(receipt.inner.logs(), main_contract)
            .ok_or(BridgeError::MissingPriorityRequest(pending.l1_tx_hash))?;
        debug!(@grey, "waiting for L2 tx: {}", l2_tx_hash.debug_lavender());

        let receipt = wait_for_receipt(&self.l2, l2_tx_hash, self.poll_interval).await?;
        if !receipt.status() {
            return Err(BridgeError::L2Failed(l2_tx_hash));
        }
        info!(@grey, "deposit of {} executed on L2", format_eth(pending.amount));
        debug!(@grey, "L2 balance: {}", format_eth(self.l2_balance().await?));

        Ok(Funded::new(l2_tx_hash, pending.to, pending.amount))
    }
}

/// Finds the canonical L2 hash of the priority request a deposit created.
fn priority_tx_hash(logs: &[Log], main_contract: Address) -> Option<TxHash> {
    logs.iter()
        .filter(|log| log.address() == main_contract)
        .find_map(|log| log.log_decode::<IMailbox::NewPriorityRequest>().ok())
        .map(|log| log.inner.data.txHash)
}
