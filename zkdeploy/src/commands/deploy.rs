// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use zkdeploy_tools::{
    core::config::parse_amount,
    ops::{self, DeployPlan},
};

use crate::{
    common_args::{AuthArgs, ConfigArgs, ProviderArgs},
    error::ZkDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only perform gas estimation, without depositing or deploying.
    #[arg(long)]
    estimate_gas: bool,
    /// Contract to deploy, by name or fully qualified name [default: deploy.contract]
    #[arg(long)]
    contract: Option<String>,
    /// ETH to bridge to L2 before deploying [default: deploy.deposit_amount]
    #[arg(long, value_name = "ETH")]
    deposit_amount: Option<String>,
    /// The constructor arguments [default: deploy.constructor_args]
    #[arg(
        long,
        num_args(0..),
        value_name = "ARGS",
        allow_hyphen_values = true,
    )]
    constructor_args: Option<Vec<String>>,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args, config_args: &ConfigArgs) -> ZkDeployResult {
    let config = config_args.load()?;
    let (name, network) = config.zksync_network(config_args.network())?;
    log::debug!("using network {name} at {}", network.url);

    let mut plan = DeployPlan::from_config(&config.deploy)?;
    if let Some(contract) = args.contract {
        plan.contract = contract;
    }
    if let Some(amount) = &args.deposit_amount {
        plan.deposit_amount = parse_amount(amount)?;
    }
    if let Some(constructor_args) = args.constructor_args {
        plan.constructor_args = constructor_args;
    }

    let artifacts = config_args.artifacts(&config);
    let connector = args.provider.connector(network);
    let mut stdout = io::stdout();
    if args.estimate_gas {
        ops::estimate(&plan, args.auth.secret(), &artifacts, &connector, &mut stdout).await?;
    } else {
        ops::deploy(&plan, args.auth.secret(), &artifacts, &connector, &mut stdout).await?;
    }
    Ok(())
}
