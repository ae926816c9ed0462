// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::time::Duration;

use alloy::{
    network::Network,
    primitives::TxHash,
    providers::Provider,
    transports::{RpcError, TransportErrorKind},
};

use crate::{
    core::{bridge::Bridge, deployment::ContractDeployer, identity::Identity},
    utils::color::Color,
};

/// Interval between receipt polls when waiting for a transaction.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("invalid endpoint `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("missing L1 endpoint: set {}", .0.red())]
    MissingEndpoint(String),
}

/// Opens a session against the target network on behalf of an identity.
///
/// Connecting must not perform any network call; failures surface from the session's operations.
pub trait Connect {
    type Session: Bridge + ContractDeployer;

    fn connect(&self, identity: &Identity) -> Result<Self::Session, NetworkError>;
}

pub fn parse_endpoint(url: &str) -> Result<reqwest::Url, NetworkError> {
    url.parse::<reqwest::Url>()
        .map_err(|err| NetworkError::InvalidUrl {
            url: url.to_owned(),
            reason: err.to_string(),
        })
}

/// Polls until the transaction has a receipt. No overall timeout is applied.
pub async fn wait_for_receipt<N: Network>(
    provider: &impl Provider<N>,
    tx_hash: TxHash,
    poll_interval: Duration,
) -> Result<N::ReceiptResponse, RpcError<TransportErrorKind>> {
    loop {
        if let Some(receipt) = provider.get_transaction_receipt(tx_hash).await? {
            return Ok(receipt);
        }
        tokio::time::sleep(poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::receipt_json;
    use alloy::{
        network::{Ethereum, ReceiptResponse},
        primitives::B256,
        providers::RootProvider,
        rpc::client::RpcClient,
        transports::mock::Asserter,
    };

    #[test]
    fn parses_endpoints() {
        assert!(parse_endpoint("https://zksync2-testnet.zksync.dev").is_ok());
        assert!(matches!(
            parse_endpoint("not a url"),
            Err(NetworkError::InvalidUrl { url, .. }) if url == "not a url"
        ));
    }

    #[tokio::test]
    async fn polls_until_receipt_is_available() {
        let asserter = Asserter::new();
        let provider = RootProvider::<Ethereum>::new(RpcClient::mocked(asserter.clone()));
        let tx_hash = B256::repeat_byte(0x11);
        asserter.push_success(&serde_json::Value::Null);
        asserter.push_success(&serde_json::Value::Null);
        asserter.push_success(&receipt_json(tx_hash, true, &[]));

        let receipt = wait_for_receipt(&provider, tx_hash, Duration::from_millis(1))
            .await
            .unwrap();
        assert_eq!(receipt.transaction_hash(), tx_hash);
        assert!(receipt.status());
        assert!(asserter.read_q().is_empty());
    }

    #[tokio::test]
    async fn propagates_rpc_errors() {
        let asserter = Asserter::new();
        let provider = RootProvider::<Ethereum>::new(RpcClient::mocked(asserter.clone()));
        asserter.push_success(&serde_json::Value::Null);
        asserter.push_failure_msg("node unavailable");

        let err = wait_for_receipt(&provider, B256::ZERO, Duration::from_millis(1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("node unavailable"));
    }
}
