// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{common_args::ConfigArgs, error::ZkDeployResult};

mod artifact;
mod deploy;
mod deposit;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Inspect a compiled artifact
    Artifact(artifact::Args),
    /// Fund the deployer on L2, then deploy the configured contract
    #[clap(visible_alias = "d")]
    Deploy(deploy::Args),
    /// Bridge ETH from L1 to the deployer's L2 account
    Deposit(deposit::Args),
}

pub async fn exec(cmd: Command, config: &ConfigArgs) -> ZkDeployResult {
    match cmd {
        Command::Artifact(args) => artifact::exec(args, config),
        Command::Deploy(args) => deploy::exec(args, config).await,
        Command::Deposit(args) => deposit::exec(args, config).await,
    }
}
