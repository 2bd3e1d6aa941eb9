//! Error types for the Guardian Bridge contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized signer: signature does not recover to the configured validator")]
    UnauthorizedSigner,

    #[error("Invalid signature: {reason}")]
    InvalidSignature { reason: String },

    // ========================================================================
    // Input Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Minimum bridge amount is {min_amount}")]
    BelowMinimumAmount { min_amount: Uint128 },

    // ========================================================================
    // Ledger Errors
    // ========================================================================

    #[error("Insufficient balance: {available} available, {requested} requested")]
    InsufficientBalance {
        available: Uint128,
        requested: Uint128,
    },

    #[error("Amount overflow on credit")]
    AmountOverflow,

    // ========================================================================
    // Replay Guard Errors
    // ========================================================================

    #[error("Nonce already used: {nonce}")]
    NonceAlreadyUsed { nonce: u64 },

    // ========================================================================
    // Wrapped Asset Registry Errors
    // ========================================================================

    #[error("Wrapped asset already registered for foreign id {foreign_id}")]
    AlreadyRegistered { foreign_id: String },

    #[error("Unknown asset: {asset}")]
    UnknownAsset { asset: String },

    #[error("Wrapped asset mismatch: registered {expected}, got {got}")]
    WrappedAssetMismatch { expected: String, got: String },

    #[error("Not a wrapped asset: {token}")]
    NotAWrappedAsset { token: String },
}
