// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io;

use zkdeploy_tools::ops;

use crate::{common_args::ConfigArgs, error::ZkDeployResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Contract to inspect, by name or fully qualified name [default: deploy.contract]
    contract: Option<String>,
}

pub fn exec(args: Args, config_args: &ConfigArgs) -> ZkDeployResult {
    let config = config_args.load()?;
    let name = args.contract.as_deref().unwrap_or(&config.deploy.contract);
    ops::describe(&config_args.artifacts(&config), name, &mut io::stdout())?;
    Ok(())
}
