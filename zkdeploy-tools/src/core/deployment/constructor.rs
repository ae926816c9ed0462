// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::JsonAbi,
    primitives::Bytes,
};

use super::DeploymentError::{self, InvalidConstructor};

/// ABI-encodes constructor arguments given as strings, coercing each to its declared type.
pub fn encode_constructor_args(
    abi: &JsonAbi,
    constructor_args: &[String],
) -> Result<Bytes, DeploymentError> {
    let Some(constructor) = abi.constructor() else {
        if constructor_args.is_empty() {
            return Ok(Bytes::new());
        }
        return Err(InvalidConstructor(format!(
            "contract has no constructor but {} arguments were given",
            constructor_args.len()
        )));
    };
    if constructor_args.len() != constructor.inputs.len() {
        return Err(InvalidConstructor(format!(
            "mismatch number of constructor arguments (want {:?} ({}); got {})",
            constructor
                .inputs
                .iter()
                .map(|param| param.ty.as_str())
                .collect::<Vec<_>>(),
            constructor.inputs.len(),
            constructor_args.len(),
        )));
    }

    let mut arg_values = Vec::<DynSolValue>::with_capacity(constructor_args.len());
    for (arg, param) in constructor_args.iter().zip(constructor.inputs.iter()) {
        let ty = param.resolve().map_err(|err| {
            InvalidConstructor(format!("could not resolve constructor arg {param}: {err}"))
        })?;
        let value = ty.coerce_str(arg).map_err(|err| {
            InvalidConstructor(format!("could not parse constructor arg {param}: {err}"))
        })?;
        arg_values.push(value);
    }

    let encoded = constructor
        .abi_encode_input_raw(&arg_values)
        .map_err(|err| InvalidConstructor(err.to_string()))?;
    Ok(encoded.into())
}
