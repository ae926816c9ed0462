// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::core::{
    artifact::ArtifactError, bridge::BridgeError, config::ConfigError,
    deployment::DeploymentError, identity::IdentityError, network::NetworkError,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of one of the [`crate::ops`] procedures, tagged with the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Identity(#[from] IdentityError),
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Network(#[from] NetworkError),
    #[error("deposit failed: {0}")]
    Bridge(#[from] BridgeError),
    #[error("deployment failed: {0}")]
    Deployment(#[from] DeploymentError),
}
