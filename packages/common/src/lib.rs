//! Common - Shared Types and Utilities for Guardian Bridge Contracts
//!
//! This package provides shared type definitions and utility functions
//! used across the Guardian Bridge smart contracts.

pub mod asset;

pub use asset::AssetInfo;
