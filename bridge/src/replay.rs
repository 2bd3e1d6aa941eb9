//! Replay guard and outbound sequencing.
//!
//! Inbound signed instructions carry a nonce chosen by the counterparty
//! system; the nonce is consumed exactly once and never forgotten. Outbound
//! actions draw from a separate monotonic sequence used purely as an audit
//! tag in emitted events.

use cosmwasm_std::{StdResult, Storage};

use crate::error::ContractError;
use crate::state::{OUTBOUND_SEQUENCE, PROCESSED_NONCES};

/// Consume an inbound nonce. Fails if it was ever consumed before.
pub fn consume_nonce(storage: &mut dyn Storage, nonce: u64) -> Result<(), ContractError> {
    if PROCESSED_NONCES
        .may_load(storage, nonce)?
        .unwrap_or(false)
    {
        return Err(ContractError::NonceAlreadyUsed { nonce });
    }
    PROCESSED_NONCES.save(storage, nonce, &true)?;
    Ok(())
}

/// Whether an inbound nonce has been consumed.
pub fn nonce_used(storage: &dyn Storage, nonce: u64) -> StdResult<bool> {
    Ok(PROCESSED_NONCES.may_load(storage, nonce)?.unwrap_or(false))
}

/// Return the current outbound sequence value, then increment it.
pub fn next_sequence(storage: &mut dyn Storage) -> StdResult<u64> {
    let sequence = OUTBOUND_SEQUENCE.load(storage)?;
    OUTBOUND_SEQUENCE.save(storage, &(sequence + 1))?;
    Ok(sequence)
}
