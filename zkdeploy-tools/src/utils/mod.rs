// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use alloy::primitives::{utils::format_ether, U256};
use color::Color;

pub mod color;

/// Pretty-prints an amount of wei as ETH.
pub fn format_eth(wei: U256) -> String {
    let text = format!("{} ETH", format_ether(wei));
    if wei.is_zero() {
        text.red()
    } else {
        text.mint()
    }
}

/// Pretty-prints a gas amount.
pub fn format_gas(gas: u64) -> String {
    let text = format!("{gas} gas");
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

/// Decodes a hex string, tolerating surrounding whitespace and a `0x` prefix.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_prefixed_and_bare_hex() {
        assert_eq!(decode0x("0xdead").unwrap(), vec![0xde, 0xad]);
        assert_eq!(decode0x("  beef\n").unwrap(), vec![0xbe, 0xef]);
        assert!(decode0x("0xzz").is_err());
    }
}
