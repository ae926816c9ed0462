// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Environment variable holding the hex-encoded private key of the deployer.
pub const PRIVATE_KEY_ENV: &str = "PK";

/// Project configuration file looked up in the working directory.
pub const DEFAULT_CONFIG: &str = zkdeploy_tools::core::config::FILENAME;
