// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Building blocks of the deployment procedures.

pub mod artifact;
pub mod bridge;
pub mod bytecode;
pub mod config;
pub mod deployment;
pub mod identity;
pub mod network;
pub mod zksync;
