// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::Write;

use alloy::primitives::{utils::format_ether, U256};

use crate::{
    core::{
        bridge::{Bridge, DepositRequest, Funded},
        identity::Secret,
        network::Connect,
        zksync::contracts::addresses,
    },
    Result,
};

/// Bridges `amount` wei of ETH to the sender's own L2 account and waits until it is spendable.
pub async fn deposit<C: Connect>(
    amount: U256,
    secret: Option<&Secret>,
    connector: &C,
    out: &mut impl Write,
) -> Result<Funded> {
    let identity = super::identity(secret)?;
    let session = connector.connect(&identity)?;

    let pending = session
        .deposit(DepositRequest {
            to: identity.address(),
            token: addresses::ETH,
            amount,
        })
        .await?;
    let funded = session.wait_finalized(pending).await?;
    writeln!(
        out,
        "deposited {} ETH to {} (L2 tx {})",
        format_ether(funded.amount()),
        funded.account(),
        funded.l2_tx_hash(),
    )?;
    Ok(funded)
}
