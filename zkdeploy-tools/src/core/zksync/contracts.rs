// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Interfaces of the zkSync contracts we talk to.

use alloy::sol;

pub mod addresses {
    pub use alloy::primitives::{address, Address};

    /// System contract that deploys every contract on zkSync.
    pub const CONTRACT_DEPLOYER: Address = address!("0x0000000000000000000000000000000000008006");
    /// Placeholder address for the base token (ETH) in bridge requests.
    pub const ETH: Address = Address::ZERO;
}

sol! {
    #[derive(Debug, Default)]
    struct L2CanonicalTransaction {
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
        uint256[4] reserved;
        bytes data;
        bytes signature;
        uint256[] factoryDeps;
        bytes paymasterInput;
        bytes reservedDynamic;
    }

    /// L1 side of the bridge, implemented by the zkSync main (diamond) contract.
    #[sol(rpc)]
    interface IMailbox {
        event NewPriorityRequest(
            uint256 txId,
            bytes32 txHash,
            uint64 expirationTimestamp,
            L2CanonicalTransaction transaction,
            bytes[] factoryDeps
        );

        function requestL2Transaction(
            address _contractL2,
            uint256 _l2Value,
            bytes calldata _calldata,
            uint256 _l2GasLimit,
            uint256 _l2GasPerPubdataByteLimit,
            bytes[] calldata _factoryDeps,
            address _refundRecipient
        ) external payable returns (bytes32 canonicalTxHash);

        function l2TransactionBaseCost(
            uint256 _gasPrice,
            uint256 _l2GasLimit,
            uint256 _l2GasPerPubdataByteLimit
        ) external view returns (uint256);
    }

    interface IContractDeployer {
        event ContractDeployed(
            address indexed deployerAddress,
            bytes32 indexed bytecodeHash,
            address indexed contractAddress
        );

        function create(
            bytes32 _salt,
            bytes32 _bytecodeHash,
            bytes calldata _input
        ) external payable returns (address);
    }
}
