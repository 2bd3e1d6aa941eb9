//! Execute handlers for the Guardian Bridge contract.
//!
//! - `outgoing` - Lock and Receive handlers (lock collateral, burn wrapped)
//! - `incoming` - Unlock and MintWrapped handlers (validator-authorized)
//! - `admin` - Wrapped-asset registration, validator rotation, emergency
//!   withdrawal, per-asset minimums

mod admin;
mod incoming;
mod outgoing;

pub use admin::*;
pub use incoming::*;
pub use outgoing::*;

use crate::error::ContractError;
use crate::hash::hex_to_bytes32;

/// Parse a 32-byte hex foreign account or asset id, rejecting the zero value.
pub(crate) fn parse_foreign_bytes32(input: &str) -> Result<[u8; 32], ContractError> {
    let bytes = hex_to_bytes32(input).map_err(|e| ContractError::InvalidAddress {
        reason: e.to_string(),
    })?;
    if bytes == [0u8; 32] {
        return Err(ContractError::InvalidAddress {
            reason: "zero value is not a valid foreign identifier".to_string(),
        });
    }
    Ok(bytes)
}
