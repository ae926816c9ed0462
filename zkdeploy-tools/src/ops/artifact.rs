// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::Write;

use crate::{
    core::artifact::{Artifact, ArtifactSource},
    Result,
};

/// Prints what a deployment of `name` would publish.
pub fn describe(
    artifacts: &impl ArtifactSource,
    name: &str,
    out: &mut impl Write,
) -> Result<Artifact> {
    let artifact = artifacts.load_artifact(name)?;
    writeln!(out, "contract: {}", artifact.contract_name)?;
    writeln!(out, "source: {}", artifact.source_name)?;
    writeln!(out, "bytecode size: {} bytes", artifact.bytecode.len())?;
    match artifact.bytecode_hash() {
        Ok(hash) => writeln!(out, "bytecode hash: {hash}")?,
        Err(err) => writeln!(out, "bytecode hash: invalid ({err})")?,
    }
    match artifact.constructor() {
        Some(constructor) => {
            let inputs: Vec<_> = constructor
                .inputs
                .iter()
                .map(|param| param.selector_type())
                .collect();
            writeln!(out, "constructor: constructor({})", inputs.join(","))?
        }
        None => writeln!(out, "constructor: none")?,
    }
    writeln!(out, "factory deps: {}", artifact.dependencies.len())?;
    Ok(artifact)
}
