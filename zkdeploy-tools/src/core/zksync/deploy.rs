// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    network::ReceiptResponse,
    primitives::{Address, Bytes, B256, U256, U64},
    providers::Provider,
    rpc::types::Log,
    sol_types::SolCall,
};

use super::{
    contracts::{addresses, IContractDeployer},
    eip712::{Eip712Transaction, DEFAULT_GAS_PER_PUBDATA_LIMIT, EIP712_TX_TYPE},
    CallRequest, Eip712Meta, ZkSyncClient,
};
use crate::{
    core::{
        bridge::Funded,
        deployment::{
            ContractDeployer, DeployedContract, DeploymentError, GasEstimate, PreparedDeployment,
        },
        network::wait_for_receipt,
    },
    utils::{color::DebugColor, format_eth, format_gas},
};

impl ZkSyncClient {
    /// Builds the ContractDeployer `create` call publishing the prepared artifact.
    fn create_request(&self, deployment: &PreparedDeployment) -> (CallRequest, Vec<Bytes>) {
        let data = IContractDeployer::createCall {
            _salt: B256::ZERO,
            _bytecodeHash: deployment.bytecode_hash,
            _input: deployment.constructor_input.clone(),
        }
        .abi_encode();

        let factory_deps = deployment.artifact.factory_deps();
        let request = CallRequest {
            from: self.address(),
            to: addresses::CONTRACT_DEPLOYER,
            data: data.into(),
            value: U256::ZERO,
            transaction_type: Some(U64::from(EIP712_TX_TYPE)),
            eip712_meta: Eip712Meta {
                gas_per_pubdata: U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT),
                factory_deps: factory_deps.iter().map(|dep| dep.to_vec()).collect(),
            },
        };
        (request, factory_deps)
    }

    async fn estimate(&self, request: CallRequest) -> Result<GasEstimate, DeploymentError> {
        let gas_limit = self
            .estimate_gas(request)
            .await
            .map_err(|err| DeploymentError::GasEstimationFailure(err.to_string()))?;
        let gas_price = self.l2.get_gas_price().await?;
        Ok(GasEstimate {
            gas_limit,
            gas_price,
        })
    }
}

impl ContractDeployer for ZkSyncClient {
    async fn estimate_deployment(
        &self,
        deployment: &PreparedDeployment,
    ) -> Result<GasEstimate, DeploymentError> {
        let (request, _) = self.create_request(deployment);
        self.estimate(request).await
    }

    async fn deploy(
        &self,
        deployment: &PreparedDeployment,
        funded: &Funded,
    ) -> Result<DeployedContract, DeploymentError> {
        debug!(@grey, "funded by L2 tx {}", funded.l2_tx_hash().debug_lavender());
        let (request, factory_deps) = self.create_request(deployment);
        let data = request.data.clone();
        let estimate = self.estimate(request).await?;
        debug!(@grey, "estimated deployment gas: {}", format_gas(estimate.gas_limit));
        debug!(@grey, "estimated deployment fee: {}", format_eth(estimate.fee()));

        let tx = Eip712Transaction {
            chain_id: self.l2.get_chain_id().await?,
            nonce: self.l2.get_transaction_count(self.address()).await?,
            from: self.address(),
            to: addresses::CONTRACT_DEPLOYER,
            value: U256::ZERO,
            data,
            gas_limit: estimate.gas_limit,
            max_fee_per_gas: estimate.gas_price,
            max_priority_fee_per_gas: 0,
            gas_per_pubdata: U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT),
            factory_deps,
        };
        let raw = tx.sign(&self.signer)?;
        let pending = self.l2.send_raw_transaction(&raw).await?;
        let tx_hash = *pending.tx_hash();
        info!(@grey, "deploy tx hash: {}", tx_hash.debug_lavender());

        let receipt = wait_for_receipt(&self.l2, tx_hash, self.poll_interval).await?;
        if !receipt.status() {
            return Err(DeploymentError::Reverted { tx_hash });
        }
        let address = deployed_address(receipt.inner.inner.logs(), self.address()).ok_or_else(
            || DeploymentError::NoContractAddress(format!("no ContractDeployed event in {tx_hash}")),
        )?;
        let gas_used = receipt.gas_used();
        debug!(@grey, "deployment used {} gas", format_gas(gas_used));

        Ok(DeployedContract {
            address,
            tx_hash,
            gas_used,
        })
    }
}

/// Address of the last contract `sender` deployed through the ContractDeployer.
///
/// Contracts created by the constructor are logged before the outer deployment completes, so the
/// deployed contract is the last one.
fn deployed_address(logs: &[Log], sender: Address) -> Option<Address> {
    logs.iter()
        .filter(|log| log.address() == addresses::CONTRACT_DEPLOYER)
        .filter_map(|log| log.log_decode::<IContractDeployer::ContractDeployed>().ok())
        .map(|log| log.inner.data)
        .filter(|event| event.deployerAddress == sender)
        .last()
        .map(|event| event.contractAddress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::deployment::encode_constructor_args,
        testing::{artifact, receipt_json},
    };
    use alloy::{
        primitives::{address, b256, TxHash},
        sol_types::SolEvent,
        transports::mock::Asserter,
    };
    use serde_json::Value;

    const SENDER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const DEPLOY_TX: TxHash =
        b256!("0x5d1d9c8c6f1d02c5a6e1b1f2a3e4d5c6b7a8f9e0d1c2b3a4f5e6d7c8b9a0f1e2");

    fn deployed(deployer: Address, contract: Address) -> Log {
        let event = IContractDeployer::ContractDeployed {
            deployerAddress: deployer,
            bytecodeHash: B256::repeat_byte(1),
            contractAddress: contract,
        };
        Log {
            inner: alloy::primitives::Log {
                address: addresses::CONTRACT_DEPLOYER,
                data: event.encode_log_data(),
            },
            ..Default::default()
        }
    }

    fn settlement() -> PreparedDeployment {
        let args = [
            "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6".to_owned(),
            "30".to_owned(),
        ];
        PreparedDeployment::new(artifact("contracts/Settlement.sol", "Settlement"), &args).unwrap()
    }

    fn funded() -> Funded {
        Funded::new(B256::repeat_byte(0xf0), SENDER, U256::from(1))
    }

    /// Queues the responses a deployment reads before polling for its receipt.
    fn submitted(asserter: &Asserter) {
        asserter.push_success(&"0xf4240"); // eth_estimateGas
        asserter.push_success(&"0xee6b280"); // eth_gasPrice
        asserter.push_success(&"0x12c"); // eth_chainId
        asserter.push_success(&"0x0"); // eth_getTransactionCount
        asserter.push_success(&DEPLOY_TX); // eth_sendRawTransaction
    }

    #[test]
    fn finds_deployed_address() {
        let child = Address::repeat_byte(0xc1);
        let settlement = Address::repeat_byte(0x5e);
        let logs = vec![
            deployed(settlement, child),
            deployed(SENDER, settlement),
            deployed(Address::repeat_byte(9), Address::repeat_byte(0xee)),
        ];
        assert_eq!(deployed_address(&logs, SENDER), Some(settlement));
        assert_eq!(deployed_address(&logs[..1], SENDER), None);
    }

    #[test]
    fn ignores_logs_from_other_contracts() {
        let sender = Address::repeat_byte(1);
        let mut log = deployed(sender, Address::repeat_byte(2));
        log.inner.address = Address::repeat_byte(3);
        assert_eq!(deployed_address(&[log], sender), None);
    }

    #[test]
    fn builds_create_request() {
        let client = ZkSyncClient::mocked(None, Asserter::new());
        let deployment = settlement();

        let (request, deps) = client.create_request(&deployment);
        assert_eq!(request.to, addresses::CONTRACT_DEPLOYER);
        assert_eq!(request.from, SENDER);
        assert_eq!(deps, vec![deployment.artifact.bytecode.clone()]);

        let call = IContractDeployer::createCall::abi_decode(&request.data).unwrap();
        assert_eq!(call._salt, B256::ZERO);
        assert_eq!(call._bytecodeHash, deployment.artifact.bytecode_hash().unwrap());
        assert_eq!(
            call._input,
            encode_constructor_args(
                &deployment.artifact.abi,
                &["0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6".to_owned(), "30".to_owned()]
            )
            .unwrap()
        );
    }

    #[tokio::test]
    async fn deploys_and_reads_address_from_receipt() {
        let asserter = Asserter::new();
        let client = ZkSyncClient::mocked(None, asserter.clone());
        let contract = Address::repeat_byte(0x5e);
        submitted(&asserter);
        asserter.push_success(&Value::Null);
        asserter.push_success(&receipt_json(DEPLOY_TX, true, &[deployed(SENDER, contract)]));

        let deployed = client.deploy(&settlement(), &funded()).await.unwrap();
        assert_eq!(deployed.address, contract);
        assert_eq!(deployed.tx_hash, DEPLOY_TX);
        assert_eq!(deployed.gas_used, 900_000);
    }

    #[tokio::test]
    async fn reverted_deployment_fails() {
        let asserter = Asserter::new();
        let client = ZkSyncClient::mocked(None, asserter.clone());
        submitted(&asserter);
        asserter.push_success(&receipt_json(DEPLOY_TX, false, &[]));

        let err = client.deploy(&settlement(), &funded()).await.unwrap_err();
        assert!(matches!(err, DeploymentError::Reverted { tx_hash } if tx_hash == DEPLOY_TX));
    }

    #[tokio::test]
    async fn receipt_without_deployment_event_fails() {
        let asserter = Asserter::new();
        let client = ZkSyncClient::mocked(None, asserter.clone());
        submitted(&asserter);
        let unrelated = deployed(Address::repeat_byte(9), Address::repeat_byte(0xee));
        asserter.push_success(&receipt_json(DEPLOY_TX, true, &[unrelated]));

        let err = client.deploy(&settlement(), &funded()).await.unwrap_err();
        assert!(matches!(err, DeploymentError::NoContractAddress(_)));
    }

    #[tokio::test]
    async fn reports_failed_gas_estimation() {
        let asserter = Asserter::new();
        let client = ZkSyncClient::mocked(None, asserter.clone());
        asserter.push_failure_msg("execution reverted: not enough balance");

        let err = client.estimate_deployment(&settlement()).await.unwrap_err();
        assert!(matches!(
            err,
            DeploymentError::GasEstimationFailure(msg) if msg.contains("not enough balance")
        ));
    }

    #[tokio::test]
    async fn estimates_from_node_prices() {
        let asserter = Asserter::new();
        let client = ZkSyncClient::mocked(None, asserter.clone());
        asserter.push_success(&"0xf4240");
        asserter.push_success(&"0xee6b280");

        let estimate = client.estimate_deployment(&settlement()).await.unwrap();
        assert_eq!(
            estimate,
            GasEstimate {
                gas_limit: 1_000_000,
                gas_price: 250_000_000,
            }
        );
    }
}
