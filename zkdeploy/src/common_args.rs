// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::{Path, PathBuf};

use zkdeploy_tools::core::{
    artifact::ArtifactStore,
    config::{self, ConfigError, NetworkConfig, ProjectConfig},
    identity::Secret,
    zksync::ZkSyncConnector,
};

use crate::constants::{DEFAULT_CONFIG, PRIVATE_KEY_ENV};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// Private key as a hex string. Warning: passing it as a flag exposes your key to shell history
    #[arg(long, env = PRIVATE_KEY_ENV, hide_env_values = true)]
    private_key: Option<Secret>,
}

impl AuthArgs {
    /// The key is only validated when the identity is created.
    pub fn secret(&self) -> Option<&Secret> {
        self.private_key.as_ref()
    }
}

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// Path to the project configuration
    #[arg(long, global = true, default_value = DEFAULT_CONFIG)]
    config: PathBuf,
    /// Network to use, as named in the configuration [default: the configured default_network]
    #[arg(long, global = true)]
    network: Option<String>,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<ProjectConfig, ConfigError> {
        config::load(&self.config)
    }

    pub fn network(&self) -> Option<&str> {
        self.network.as_deref()
    }

    /// Artifacts directory, relative to the configuration file.
    pub fn artifacts(&self, config: &ProjectConfig) -> ArtifactStore {
        let base = self.config.parent().unwrap_or(Path::new("."));
        ArtifactStore::new(base.join(&config.paths.artifacts))
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// zkSync RPC endpoint [default: the network's url]
    #[arg(short, long)]
    endpoint: Option<String>,
    /// L1 RPC endpoint [default: read from the network's eth_network variable]
    #[arg(long)]
    eth_endpoint: Option<String>,
}

impl ProviderArgs {
    pub fn connector(&self, network: &NetworkConfig) -> ZkSyncConnector {
        ZkSyncConnector::builder()
            .l2_endpoint(self.endpoint.clone().unwrap_or_else(|| network.url.clone()))
            .l1_endpoint(
                self.eth_endpoint
                    .clone()
                    .or_else(|| network.eth_endpoint()),
            )
            .l1_endpoint_env(network.eth_network.clone())
            .build()
    }
}
