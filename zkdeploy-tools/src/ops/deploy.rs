// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment, funded by an L1 → L2 deposit.

use std::io::Write;

use alloy::primitives::{utils::format_ether, U256};

use crate::{
    core::{
        artifact::ArtifactSource,
        bridge::{Bridge, DepositRequest},
        config::{ConfigError, DeployConfig},
        deployment::{ContractDeployer, DeployedContract, GasEstimate, PreparedDeployment},
        identity::Secret,
        network::Connect,
        zksync::contracts::addresses,
    },
    utils::{color::DebugColor, format_eth},
    Result,
};

/// What to deploy and how much to fund the deployer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    /// Bare or fully qualified contract name.
    pub contract: String,
    /// Wei bridged to L2 before deploying.
    pub deposit_amount: U256,
    pub constructor_args: Vec<String>,
}

impl DeployPlan {
    pub fn from_config(config: &DeployConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            contract: config.contract.clone(),
            deposit_amount: config.deposit_amount()?,
            constructor_args: config.constructor_args.clone(),
        })
    }
}

/// Funds the sender on L2, waits for the deposit to execute, then deploys the contract.
///
/// Prints an announcement line and, on success, a single confirmation line to `out`.
pub async fn deploy<C: Connect>(
    plan: &DeployPlan,
    secret: Option<&Secret>,
    artifacts: &impl ArtifactSource,
    connector: &C,
    out: &mut impl Write,
) -> Result<DeployedContract> {
    writeln!(out, "Running deploy script for the {} contract", plan.contract)?;

    let identity = super::identity(secret)?;
    let artifact = artifacts.load_artifact(&plan.contract)?;
    debug!(@grey, "loaded artifact {}", artifact.fully_qualified_name());
    let deployment = PreparedDeployment::new(artifact, &plan.constructor_args)?;
    let session = connector.connect(&identity)?;

    info!(@grey, "depositing {} to L2", format_eth(plan.deposit_amount));
    let pending = session
        .deposit(DepositRequest {
            to: identity.address(),
            token: addresses::ETH,
            amount: plan.deposit_amount,
        })
        .await?;
    let funded = session.wait_finalized(pending).await?;

    let name = &deployment.artifact.contract_name;
    info!(@grey, "deploying {name}");
    let deployed = session.deploy(&deployment, &funded).await?;
    debug!(@grey, "deployment tx: {}", deployed.tx_hash.debug_lavender());

    writeln!(out, "{name} was deployed to {}", deployed.address)?;
    Ok(deployed)
}

/// Estimates the deployment without depositing or deploying anything.
pub async fn estimate<C: Connect>(
    plan: &DeployPlan,
    secret: Option<&Secret>,
    artifacts: &impl ArtifactSource,
    connector: &C,
    out: &mut impl Write,
) -> Result<GasEstimate> {
    let identity = super::identity(secret)?;
    let artifact = artifacts.load_artifact(&plan.contract)?;
    let deployment = PreparedDeployment::new(artifact, &plan.constructor_args)?;
    let session = connector.connect(&identity)?;

    let estimate = session.estimate_deployment(&deployment).await?;
    writeln!(
        out,
        "deployment of {} needs {} gas at {} wei per gas (up to {} ETH)",
        deployment.artifact.contract_name,
        estimate.gas_limit,
        estimate.gas_price,
        format_ether(estimate.fee()),
    )?;
    Ok(estimate)
}
