// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Versioned bytecode hashes, as expected by the zkSync ContractDeployer.

use alloy::primitives::B256;
use sha2::{Digest, Sha256};

/// Size of a zkEVM word in bytes.
pub const WORD_SIZE: usize = 32;

/// Bytecode length is encoded in two bytes, counted in words.
pub const MAX_BYTECODE_WORDS: usize = (1 << 16) - 1;

/// Version byte for bytecode hashes.
const BYTECODE_HASH_VERSION: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum BytecodeError {
    #[error("bytecode length {0} is not a multiple of {WORD_SIZE} bytes")]
    NotWordAligned(usize),
    #[error("bytecode has {0} words, the limit is {MAX_BYTECODE_WORDS}")]
    TooLong(usize),
    #[error("bytecode has an even number of words ({0})")]
    EvenWordCount(usize),
}

/// Hashes bytecode the way zkSync identifies it on-chain:
/// `version (1 byte) ++ 0x00 ++ length in words (2 bytes BE) ++ sha256(code)[4..]`.
pub fn hash_bytecode(code: &[u8]) -> Result<B256, BytecodeError> {
    if code.len() % WORD_SIZE != 0 {
        return Err(BytecodeError::NotWordAligned(code.len()));
    }
    let words = code.len() / WORD_SIZE;
    if words > MAX_BYTECODE_WORDS {
        return Err(BytecodeError::TooLong(words));
    }
    if words % 2 == 0 {
        return Err(BytecodeError::EvenWordCount(words));
    }

    let digest = Sha256::digest(code);
    let mut hash = B256::ZERO;
    hash[0] = BYTECODE_HASH_VERSION;
    hash[2..4].copy_from_slice(&(words as u16).to_be_bytes());
    hash[4..].copy_from_slice(&digest[4..]);
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;

    #[test]
    fn hashes_single_word() {
        // sha256 of 32 zero bytes is 66687aad f862bd77...
        assert_eq!(
            hash_bytecode(&[0; 32]).unwrap(),
            b256!("0x01000001f862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925")
        );
    }

    #[test]
    fn encodes_length_in_words() {
        let hash = hash_bytecode(&[7; 32 * 259]).unwrap();
        assert_eq!(&hash[..4], &[1, 0, 0x01, 0x03]);
    }

    #[test]
    fn rejects_invalid_lengths() {
        assert!(matches!(
            hash_bytecode(&[0; 33]),
            Err(BytecodeError::NotWordAligned(33))
        ));
        assert!(matches!(
            hash_bytecode(&[0; 64]),
            Err(BytecodeError::EvenWordCount(2))
        ));
        assert!(matches!(
            hash_bytecode(&[]),
            Err(BytecodeError::EvenWordCount(0))
        ));
        assert!(matches!(
            hash_bytecode(&vec![0; 32 * (MAX_BYTECODE_WORDS + 2)]),
            Err(BytecodeError::TooLong(_))
        ));
    }
}
