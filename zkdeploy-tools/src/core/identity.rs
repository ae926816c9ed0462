// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Signing identity used as the sender of both the deposit and the deployment.

use std::{fmt, str::FromStr};

use alloy::{
    network::EthereumWallet,
    primitives::{Address, B256},
    signers::local::PrivateKeySigner,
};

use crate::utils::decode0x;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid private key: {0}")]
    InvalidKey(String),
}

/// A secret key string as read from the environment or command line.
///
/// The value is never printed: both [`fmt::Debug`] and [`fmt::Display`] are redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl FromStr for Secret {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(<redacted>)")
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Key-pair derived actor that authorizes transactions.
#[derive(Clone)]
pub struct Identity {
    signer: PrivateKeySigner,
}

impl Identity {
    /// Derives the identity from a hex-encoded private key (with or without `0x`).
    pub fn from_secret(secret: &Secret) -> Result<Self, IdentityError> {
        let bytes = decode0x(secret.expose())
            .map_err(|_| IdentityError::InvalidKey("not a hex string".to_owned()))?;
        if bytes.len() != B256::len_bytes() {
            return Err(IdentityError::InvalidKey(format!(
                "expected {} bytes, got {}",
                B256::len_bytes(),
                bytes.len()
            )));
        }
        let signer = PrivateKeySigner::from_bytes(&B256::from_slice(&bytes))
            .map_err(|err| IdentityError::InvalidKey(err.to_string()))?;
        Ok(Self { signer })
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    pub fn wallet(&self) -> EthereumWallet {
        EthereumWallet::new(self.signer.clone())
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn derives_address() {
        let expected = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let identity = Identity::from_secret(&KEY.into()).unwrap();
        assert_eq!(identity.address(), expected);

        let bare = Identity::from_secret(&KEY.trim_start_matches("0x").into()).unwrap();
        assert_eq!(bare.address(), expected);
    }

    #[test]
    fn rejects_malformed_keys() {
        let too_long = format!("{KEY}00");
        let zero = "00".repeat(32);
        for key in ["", "0x", "not-a-key", "0xac0974", too_long.as_str(), zero.as_str()] {
            assert!(
                matches!(
                    Identity::from_secret(&key.into()),
                    Err(IdentityError::InvalidKey(_))
                ),
                "accepted {key:?}"
            );
        }
    }

    #[test]
    fn never_prints_the_key() {
        let secret = Secret::from(KEY);
        assert!(!format!("{secret:?} {secret}").contains("ac0974"));

        let identity = Identity::from_secret(&secret).unwrap();
        assert!(!format!("{identity:?}").contains("ac0974"));
    }
}
