// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! End-to-end procedures run by the CLI.

use crate::{
    core::{
        config::ConfigError,
        identity::{Identity, Secret},
    },
    utils::color::DebugColor,
    Result,
};

pub use artifact::describe;
pub use deploy::{deploy, estimate, DeployPlan};
pub use deposit::deposit;

mod artifact;
mod deploy;
mod deposit;

/// Creates the signing identity. Nothing touches the network before this succeeds.
fn identity(secret: Option<&Secret>) -> Result<Identity> {
    let secret = secret.ok_or(ConfigError::MissingSecret)?;
    let identity = Identity::from_secret(secret)?;
    info!(@grey, "sender address: {}", identity.address().debug_lavender());
    Ok(identity)
}
