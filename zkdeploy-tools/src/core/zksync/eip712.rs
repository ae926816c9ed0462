// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! zkSync EIP-712 transactions (type `0x71`).
//!
//! Deployments have to carry the contract bytecode in `factoryDeps`, which only this transaction
//! type supports. The transaction is signed as EIP-712 typed data and sent RLP-encoded.

use alloy::{
    primitives::{Address, Bytes, Signature, B256, U256},
    rlp::{Encodable, Header},
    signers::{local::PrivateKeySigner, SignerSync},
    sol_types::{eip712_domain, SolStruct},
};

use crate::core::bytecode::{hash_bytecode, BytecodeError};

/// Transaction type byte.
pub const EIP712_TX_TYPE: u8 = 0x71;

/// Gas per pubdata byte used for L2 transactions.
pub const DEFAULT_GAS_PER_PUBDATA_LIMIT: u64 = 50_000;

mod typed {
    alloy::sol! {
        struct Transaction {
            uint256 txType;
            uint256 from;
            uint256 to;
            uint256 gasLimit;
            uint256 gasPerPubdataByteLimit;
            uint256 maxFeePerGas;
            uint256 maxPriorityFeePerGas;
            uint256 paymaster;
            uint256 nonce;
            uint256 value;
            bytes data;
            bytes32[] factoryDeps;
            bytes paymasterInput;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Eip712Error {
    #[error("{0}")]
    Bytecode(#[from] BytecodeError),
    #[error("signing failed: {0}")]
    Signer(#[from] alloy::signers::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eip712Transaction {
    pub chain_id: u64,
    pub nonce: u64,
    pub from: Address,
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
    pub gas_limit: u64,
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
    pub gas_per_pubdata: U256,
    pub factory_deps: Vec<Bytes>,
}

impl Eip712Transaction {
    /// Hash signed by the sender, over the `zkSync` v2 domain.
    pub fn signing_hash(&self) -> Result<B256, Eip712Error> {
        let factory_deps = self
            .factory_deps
            .iter()
            .map(|dep| hash_bytecode(dep))
            .collect::<Result<Vec<_>, _>>()?;
        let tx = typed::Transaction {
            txType: U256::from(EIP712_TX_TYPE),
            from: address_to_u256(self.from),
            to: address_to_u256(self.to),
            gasLimit: U256::from(self.gas_limit),
            gasPerPubdataByteLimit: self.gas_per_pubdata,
            maxFeePerGas: U256::from(self.max_fee_per_gas),
            maxPriorityFeePerGas: U256::from(self.max_priority_fee_per_gas),
            paymaster: U256::ZERO,
            nonce: U256::from(self.nonce),
            value: self.value,
            data: self.data.clone(),
            factoryDeps: factory_deps,
            paymasterInput: Bytes::new(),
        };
        let domain = eip712_domain! {
            name: "zkSync",
            version: "2",
            chain_id: self.chain_id,
        };
        Ok(tx.eip712_signing_hash(&domain))
    }

    /// Signs and serializes the transaction, ready for `eth_sendRawTransaction`.
    pub fn sign(&self, signer: &PrivateKeySigner) -> Result<Bytes, Eip712Error> {
        let hash = self.signing_hash()?;
        let signature = signer.sign_hash_sync(&hash)?;
        Ok(self.encode_signed(&signature))
    }

    pub fn encode_signed(&self, signature: &Signature) -> Bytes {
        let mut payload = Vec::new();
        self.nonce.encode(&mut payload);
        self.max_priority_fee_per_gas.encode(&mut payload);
        self.max_fee_per_gas.encode(&mut payload);
        self.gas_limit.encode(&mut payload);
        self.to.encode(&mut payload);
        self.value.encode(&mut payload);
        self.data.encode(&mut payload);
        (signature.v() as u8).encode(&mut payload);
        signature.r().encode(&mut payload);
        signature.s().encode(&mut payload);
        self.chain_id.encode(&mut payload);
        self.from.encode(&mut payload);
        self.gas_per_pubdata.encode(&mut payload);
        self.factory_deps.encode(&mut payload);
        Bytes::from(signature.as_bytes().to_vec()).encode(&mut payload);
        // no paymaster
        Header {
            list: true,
            payload_length: 0,
        }
        .encode(&mut payload);

        let mut out = vec![EIP712_TX_TYPE];
        Header {
            list: true,
            payload_length: payload.len(),
        }
        .encode(&mut out);
        out.extend_from_slice(&payload);
        out.into()
    }
}

fn address_to_u256(address: Address) -> U256 {
    U256::from_be_slice(address.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::address,
        rlp::{Decodable, Header},
    };

    fn transaction() -> Eip712Transaction {
        Eip712Transaction {
            chain_id: 280,
            nonce: 3,
            from: address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"),
            to: super::super::contracts::addresses::CONTRACT_DEPLOYER,
            value: U256::ZERO,
            data: Bytes::from_static(&[0x9c, 0x4d, 0x53, 0x5b]),
            gas_limit: 1_000_000,
            max_fee_per_gas: 250_000_000,
            max_priority_fee_per_gas: 0,
            gas_per_pubdata: U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT),
            factory_deps: vec![Bytes::from(vec![1; 32])],
        }
    }

    fn signer() -> PrivateKeySigner {
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
            .parse()
            .unwrap()
    }

    #[test]
    fn signature_recovers_sender() {
        let tx = transaction();
        let hash = tx.signing_hash().unwrap();
        let signature = signer().sign_hash_sync(&hash).unwrap();
        assert_eq!(
            signature.recover_address_from_prehash(&hash).unwrap(),
            tx.from
        );
    }

    #[test]
    fn signing_hash_covers_chain_and_deps() {
        let tx = transaction();
        let other_chain = Eip712Transaction {
            chain_id: 324,
            ..transaction()
        };
        let other_deps = Eip712Transaction {
            factory_deps: vec![Bytes::from(vec![2; 32])],
            ..transaction()
        };
        let hash = tx.signing_hash().unwrap();
        assert_ne!(hash, other_chain.signing_hash().unwrap());
        assert_ne!(hash, other_deps.signing_hash().unwrap());
    }

    #[test]
    fn rejects_invalid_factory_deps() {
        let tx = Eip712Transaction {
            factory_deps: vec![Bytes::from(vec![0; 31])],
            ..transaction()
        };
        assert!(matches!(
            tx.signing_hash(),
            Err(Eip712Error::Bytecode(BytecodeError::NotWordAligned(31)))
        ));
    }

    #[test]
    fn encodes_typed_rlp_list() {
        let tx = transaction();
        let raw = tx.sign(&signer()).unwrap();
        assert_eq!(raw[0], EIP712_TX_TYPE);

        let mut body = &raw[1..];
        let header = Header::decode(&mut body).unwrap();
        assert!(header.list);
        assert_eq!(header.payload_length, body.len());

        // leading fields, in order
        assert_eq!(u64::decode(&mut body).unwrap(), tx.nonce);
        assert_eq!(u128::decode(&mut body).unwrap(), tx.max_priority_fee_per_gas);
        assert_eq!(u128::decode(&mut body).unwrap(), tx.max_fee_per_gas);
        assert_eq!(u64::decode(&mut body).unwrap(), tx.gas_limit);
        assert_eq!(Address::decode(&mut body).unwrap(), tx.to);
        assert_eq!(U256::decode(&mut body).unwrap(), tx.value);
        assert_eq!(Bytes::decode(&mut body).unwrap(), tx.data);
    }
}
