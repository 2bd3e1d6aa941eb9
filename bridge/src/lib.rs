//! Guardian Bridge Contract - Single-Validator Cross-Chain Asset Custody
//!
//! This contract is the settlement core of a two-chain asset bridge. It
//! custodies local assets, releases or mints on the strength of one trusted
//! validator's secp256k1 signature, and rejects any replayed instruction via
//! a consumed-nonce set.
//!
//! # Outgoing Flow (Lock / Burn)
//! 1. User locks native or CW20 tokens into bridge custody (or burns wrapped
//!    tokens back to the bridge)
//! 2. A relayer observes the emitted event and submits proof on the
//!    counterparty chain
//!
//! # Incoming Flow (Unlock / Mint)
//! 1. The validator observes a burn/lock on the counterparty chain and signs
//!    an authorization over the instruction fields and a one-time nonce
//! 2. A relayer submits the signed instruction here
//! 3. The contract consumes the nonce, verifies the signature recovers to the
//!    configured validator, and releases custody or mints wrapped tokens
//!
//! # Security
//! - Single trusted validator key, rotatable by the owner
//! - Consumed-nonce set prevents replay of signed instructions
//! - All bookkeeping is written before any outbound transfer message
//! - Owner-only emergency withdrawal escape hatch

pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod ledger;
pub mod msg;
mod query;
pub mod replay;
pub mod state;
pub mod verify;

pub use crate::error::ContractError;
pub use crate::hash::keccak256;
