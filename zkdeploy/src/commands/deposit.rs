// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use zkdeploy_tools::{core::config::parse_amount, ops};

use crate::{
    common_args::{AuthArgs, ConfigArgs, ProviderArgs},
    error::ZkDeployResult,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// ETH to bridge [default: deploy.deposit_amount]
    #[arg(long, value_name = "ETH")]
    amount: Option<String>,

    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
}

pub async fn exec(args: Args, config_args: &ConfigArgs) -> ZkDeployResult {
    let config = config_args.load()?;
    let (_, network) = config.zksync_network(config_args.network())?;
    let amount = match &args.amount {
        Some(amount) => parse_amount(amount)?,
        None => config.deploy.deposit_amount()?,
    };

    let connector = args.provider.connector(network);
    ops::deposit(amount, args.auth.secret(), &connector, &mut io::stdout()).await?;
    Ok(())
}
