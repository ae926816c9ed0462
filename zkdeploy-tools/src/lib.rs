// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for funding and deploying contracts on zkSync Era chains.
//!
//! The [`ops`] module holds the end-to-end procedures (deposit, deploy, artifact inspection).
//! Everything they touch on the network goes through the traits in [`core::network`],
//! [`core::bridge`] and [`core::deployment`], so they can be driven against a test double.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
