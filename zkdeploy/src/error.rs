// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use zkdeploy_tools::core::config::ConfigError;

pub type ZkDeployResult = Result<(), ZkDeployError>;

/// Exit code for configuration problems, matching clap's usage errors.
const CONFIG_EXIT_CODE: u8 = 2;

#[derive(Debug)]
pub struct ZkDeployError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl ZkDeployError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    fn config(error: impl Into<eyre::Error>) -> Self {
        Self {
            error: error.into(),
            exit_code: ExitCode::from(CONFIG_EXIT_CODE),
        }
    }

    fn failure(error: impl Into<eyre::Error>) -> Self {
        Self {
            error: error.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl fmt::Display for ZkDeployError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

macro_rules! impl_from {
    ($($error:ty => $kind:ident),* $(,)?) => {
        $(
            impl From<$error> for ZkDeployError {
                fn from(err: $error) -> Self {
                    Self::$kind(err)
                }
            }
        )*
    };
}

impl_from! {
    std::io::Error => failure,
    ConfigError => config,
    dotenvy::Error => config,
}

impl From<zkdeploy_tools::Error> for ZkDeployError {
    fn from(err: zkdeploy_tools::Error) -> Self {
        match err {
            zkdeploy_tools::Error::Config(err) => Self::config(err),
            err => Self::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkdeploy_tools::core::bridge::BridgeError;

    #[test]
    fn config_problems_exit_like_usage_errors() {
        let err = ZkDeployError::from(ConfigError::MissingSecret);
        assert_eq!(err.exit_code(), ExitCode::from(CONFIG_EXIT_CODE));
        let err = ZkDeployError::from(zkdeploy_tools::Error::Config(ConfigError::MissingSecret));
        assert_eq!(err.exit_code(), ExitCode::from(CONFIG_EXIT_CODE));
        assert_eq!(err.to_string(), ConfigError::MissingSecret.to_string());
    }

    #[test]
    fn procedure_failures_exit_with_failure() {
        let err = ZkDeployError::from(zkdeploy_tools::Error::Bridge(BridgeError::L2Failed(
            Default::default(),
        )));
        assert_eq!(err.exit_code(), ExitCode::FAILURE);
        assert!(err.to_string().starts_with("deposit failed"));
    }
}
