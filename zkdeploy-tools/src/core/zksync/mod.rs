// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! zkSync Era client: bridge deposits through the L1 Mailbox and deployments through the
//! ContractDeployer system contract.

use std::time::Duration;

use alloy::{
    network::{AnyNetwork, EthereumWallet},
    primitives::{Address, Bytes, U256, U64},
    providers::{DynProvider, Provider, ProviderBuilder, RootProvider},
    signers::local::PrivateKeySigner,
    transports::{RpcError, TransportErrorKind},
};
use serde::Serialize;
use typed_builder::TypedBuilder;

use crate::core::{
    identity::Identity,
    network::{parse_endpoint, Connect, NetworkError, DEFAULT_POLL_INTERVAL},
};

pub mod contracts;
pub mod eip712;

mod deploy;
mod deposit;

/// Builds [`ZkSyncClient`] sessions for a network.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct ZkSyncConnector {
    /// zkSync (L2) RPC endpoint.
    l2_endpoint: String,
    /// L1 RPC endpoint, only needed for deposits.
    #[builder(default)]
    l1_endpoint: Option<String>,
    /// Where the L1 endpoint is expected to come from, for error messages.
    #[builder(default = "ZKTESTNET_RPC".to_owned())]
    l1_endpoint_env: String,
    #[builder(default = DEFAULT_POLL_INTERVAL)]
    poll_interval: Duration,
}

impl Connect for ZkSyncConnector {
    type Session = ZkSyncClient;

    fn connect(&self, identity: &Identity) -> Result<ZkSyncClient, NetworkError> {
        let l2 = RootProvider::<AnyNetwork>::new_http(parse_endpoint(&self.l2_endpoint)?);
        let l1 = self
            .l1_endpoint
            .as_deref()
            .map(parse_endpoint)
            .transpose()?
            .map(|url| {
                ProviderBuilder::new()
                    .wallet(EthereumWallet::from(identity.signer().clone()))
                    .connect_http(url)
                    .erased()
            });
        Ok(ZkSyncClient {
            l2,
            l1,
            l1_endpoint_env: self.l1_endpoint_env.clone(),
            signer: identity.signer().clone(),
            poll_interval: self.poll_interval,
        })
    }
}

/// Session on a zkSync network, signing as one identity.
#[derive(Debug, Clone)]
pub struct ZkSyncClient {
    l2: RootProvider<AnyNetwork>,
    /// L1 provider signing with the session's key, if an L1 endpoint was given.
    l1: Option<DynProvider>,
    l1_endpoint_env: String,
    signer: PrivateKeySigner,
    poll_interval: Duration,
}

impl ZkSyncClient {
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    fn l1(&self) -> Result<&DynProvider, NetworkError> {
        self.l1
            .as_ref()
            .ok_or_else(|| NetworkError::MissingEndpoint(self.l1_endpoint_env.clone()))
    }

    /// Address of the main zkSync contract on L1.
    pub async fn main_contract(&self) -> Result<Address, RpcError<TransportErrorKind>> {
        self.l2.raw_request("zks_getMainContract".into(), ()).await
    }

    /// L2 gas needed to execute an L1 → L2 transaction.
    pub async fn estimate_l1_to_l2(
        &self,
        request: CallRequest,
    ) -> Result<U256, RpcError<TransportErrorKind>> {
        self.l2
            .raw_request("zks_estimateGasL1ToL2".into(), (request,))
            .await
    }

    /// Gas estimate for an L2 transaction, including EIP-712 metadata.
    pub async fn estimate_gas(
        &self,
        request: CallRequest,
    ) -> Result<u64, RpcError<TransportErrorKind>> {
        let gas: U64 = self.l2.raw_request("eth_estimateGas".into(), (request,)).await?;
        Ok(gas.to::<u64>())
    }

    pub async fn l2_balance(&self) -> Result<U256, RpcError<TransportErrorKind>> {
        self.l2.get_balance(self.address()).await
    }
}

/// Call request in the zkSync JSON-RPC dialect.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    pub value: U256,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<U64>,
    pub eip712_meta: Eip712Meta,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Eip712Meta {
    pub gas_per_pubdata: U256,
    /// Sent as arrays of byte values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub factory_deps: Vec<Vec<u8>>,
}

#[cfg(test)]
impl ZkSyncClient {
    /// Client answering L2 requests from `l2`, and L1 requests from `l1` if given.
    pub(crate) fn mocked(
        l1: Option<alloy::transports::mock::Asserter>,
        l2: alloy::transports::mock::Asserter,
    ) -> Self {
        let signer: PrivateKeySigner =
            "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                .parse()
                .unwrap();
        let l1 = l1.map(|asserter| {
            ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer.clone()))
                .connect_mocked_client(asserter)
                .erased()
        });
        Self {
            l2: RootProvider::new(alloy::rpc::client::RpcClient::mocked(l2)),
            l1,
            l1_endpoint_env: "ZKTESTNET_RPC".to_owned(),
            signer,
            poll_interval: Duration::from_millis(1),
        }
    }
}
