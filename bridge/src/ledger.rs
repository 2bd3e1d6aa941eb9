//! Custody ledger.
//!
//! Tracks the amount of each asset held by the bridge. These are pure
//! bookkeeping mutations: the caller performs the matching asset transfer
//! into custody before crediting, and issues the transfer out of custody
//! only after debiting (as a response message, i.e. after all state writes).

use cosmwasm_std::{StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::LOCKED_BALANCES;

/// Increase the custodied balance of an asset. Fails on overflow instead of
/// wrapping.
pub fn credit(
    storage: &mut dyn Storage,
    asset_id: &str,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let current = LOCKED_BALANCES
        .may_load(storage, asset_id.to_string())?
        .unwrap_or_default();
    let updated = current
        .checked_add(amount)
        .map_err(|_| ContractError::AmountOverflow)?;
    LOCKED_BALANCES.save(storage, asset_id.to_string(), &updated)?;
    Ok(updated)
}

/// Decrease the custodied balance of an asset. Fails if the balance is
/// insufficient; the balance can never go negative.
pub fn debit(
    storage: &mut dyn Storage,
    asset_id: &str,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let current = LOCKED_BALANCES
        .may_load(storage, asset_id.to_string())?
        .unwrap_or_default();
    if current < amount {
        return Err(ContractError::InsufficientBalance {
            available: current,
            requested: amount,
        });
    }
    let updated = current - amount;
    LOCKED_BALANCES.save(storage, asset_id.to_string(), &updated)?;
    Ok(updated)
}

/// Current custodied balance of an asset (zero if never credited).
pub fn balance(storage: &dyn Storage, asset_id: &str) -> StdResult<Uint128> {
    Ok(LOCKED_BALANCES
        .may_load(storage, asset_id.to_string())?
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn credit_then_debit() {
        let mut deps = mock_dependencies();
        credit(deps.as_mut().storage, "uluna", Uint128::new(1000)).unwrap();
        credit(deps.as_mut().storage, "uluna", Uint128::new(500)).unwrap();
        assert_eq!(
            balance(deps.as_ref().storage, "uluna").unwrap(),
            Uint128::new(1500)
        );

        let remaining = debit(deps.as_mut().storage, "uluna", Uint128::new(600)).unwrap();
        assert_eq!(remaining, Uint128::new(900));
    }

    #[test]
    fn debit_more_than_available_fails() {
        let mut deps = mock_dependencies();
        credit(deps.as_mut().storage, "uluna", Uint128::new(100)).unwrap();

        let err = debit(deps.as_mut().storage, "uluna", Uint128::new(101)).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientBalance {
                available: Uint128::new(100),
                requested: Uint128::new(101),
            }
        );
        // Balance untouched by the failed debit
        assert_eq!(
            balance(deps.as_ref().storage, "uluna").unwrap(),
            Uint128::new(100)
        );
    }

    #[test]
    fn debit_unknown_asset_fails() {
        let mut deps = mock_dependencies();
        let err = debit(deps.as_mut().storage, "unknown", Uint128::new(1)).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientBalance {
                available: Uint128::zero(),
                requested: Uint128::new(1),
            }
        );
    }

    #[test]
    fn credit_overflow_fails() {
        let mut deps = mock_dependencies();
        credit(deps.as_mut().storage, "uluna", Uint128::MAX).unwrap();

        let err = credit(deps.as_mut().storage, "uluna", Uint128::new(1)).unwrap_err();
        assert_eq!(err, ContractError::AmountOverflow);
        assert_eq!(
            balance(deps.as_ref().storage, "uluna").unwrap(),
            Uint128::MAX
        );
    }

    #[test]
    fn balances_are_independent_per_asset() {
        let mut deps = mock_dependencies();
        credit(deps.as_mut().storage, "uluna", Uint128::new(10)).unwrap();
        credit(deps.as_mut().storage, "terra1token", Uint128::new(20)).unwrap();

        assert_eq!(
            balance(deps.as_ref().storage, "uluna").unwrap(),
            Uint128::new(10)
        );
        assert_eq!(
            balance(deps.as_ref().storage, "terra1token").unwrap(),
            Uint128::new(20)
        );
    }
}
