// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Project configuration, read from `zkdeploy.toml`.

use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};

use alloy::primitives::{utils::parse_ether, U256};
use serde::Deserialize;

/// Filename of the project configuration file.
pub const FILENAME: &str = "zkdeploy.toml";

/// Name of the network used when none is configured.
pub const DEFAULT_NETWORK: &str = "zkTestnet";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml read error: {0}")]
    TomlRead(#[from] toml::de::Error),

    #[error("missing {}", .0.display())]
    Missing(PathBuf),
    #[error("unknown network `{0}`")]
    UnknownNetwork(String),
    #[error("network `{0}` is not a zkSync network")]
    NotZkSync(String),
    #[error("invalid deposit amount `{value}`: {reason}")]
    InvalidAmount { value: String, reason: String },
    #[error("missing private key: set PK or pass --private-key")]
    MissingSecret,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub default_network: String,
    pub zksolc: ZksolcConfig,
    pub solidity: SolidityConfig,
    pub networks: BTreeMap<String, NetworkConfig>,
    pub deploy: DeployConfig,
    pub paths: PathsConfig,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            default_network: DEFAULT_NETWORK.to_owned(),
            zksolc: ZksolcConfig::default(),
            solidity: SolidityConfig::default(),
            networks: BTreeMap::from([(DEFAULT_NETWORK.to_owned(), NetworkConfig::default())]),
            deploy: DeployConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl ProjectConfig {
    /// Looks up a network by name, falling back to `default_network`.
    pub fn network(&self, name: Option<&str>) -> Result<(&str, &NetworkConfig), ConfigError> {
        let name = name.unwrap_or(&self.default_network);
        self.networks
            .get_key_value(name)
            .map(|(name, network)| (name.as_str(), network))
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_owned()))
    }

    /// Like [`ProjectConfig::network`], but rejects networks without `zksync = true`.
    pub fn zksync_network(&self, name: Option<&str>) -> Result<(&str, &NetworkConfig), ConfigError> {
        let (name, network) = self.network(name)?;
        if !network.zksync {
            return Err(ConfigError::NotZkSync(name.to_owned()));
        }
        Ok((name, network))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ZksolcConfig {
    pub version: String,
    pub compiler_source: CompilerSource,
}

impl Default for ZksolcConfig {
    fn default() -> Self {
        Self {
            version: "1.3.1".to_owned(),
            compiler_source: CompilerSource::Binary,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompilerSource {
    Binary,
    Docker,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SolidityConfig {
    pub version: String,
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            version: "0.8.17".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// zkSync (L2) RPC endpoint.
    pub url: String,
    /// Name of the environment variable holding the L1 RPC endpoint.
    pub eth_network: String,
    pub zksync: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            url: "https://zksync2-testnet.zksync.dev".to_owned(),
            eth_network: "ZKTESTNET_RPC".to_owned(),
            zksync: true,
        }
    }
}

impl NetworkConfig {
    /// Reads the L1 endpoint from the environment. Absence is only an error once a deposit is made.
    pub fn eth_endpoint(&self) -> Option<String> {
        env::var(&self.eth_network).ok().filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    pub contract: String,
    pub deposit_amount: String,
    pub constructor_args: Vec<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            contract: "Settlement".to_owned(),
            deposit_amount: "0.05".to_owned(),
            constructor_args: vec![
                "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6".to_owned(),
                "30".to_owned(),
            ],
        }
    }
}

impl DeployConfig {
    pub fn deposit_amount(&self) -> Result<U256, ConfigError> {
        parse_amount(&self.deposit_amount)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub artifacts: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            artifacts: PathBuf::from("artifacts-zk"),
        }
    }
}

/// Parses an ETH amount in decimal notation (e.g. `0.05`) into wei.
pub fn parse_amount(value: &str) -> Result<U256, ConfigError> {
    parse_ether(value.trim()).map_err(|err| ConfigError::InvalidAmount {
        value: value.to_owned(),
        reason: err.to_string(),
    })
}

pub fn load(path: impl AsRef<Path>) -> Result<ProjectConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::Missing(path.to_owned()));
    }

    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}
