//! State definitions for the Guardian Bridge contract.
//!
//! All mutable state is owned by this contract and mutated only through the
//! execute handlers: the custody ledger, the consumed-nonce set, the outbound
//! sequence counter, and the wrapped-asset mappings.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address; gates wrapped-asset registration, validator rotation,
    /// and emergency withdrawal
    pub owner: Addr,
    /// 20-byte address of the validator key trusted to authorize inbound
    /// unlock and mint instructions
    pub validator: [u8; 20],
    /// Default minimum amount for lock, mint, and burn (smallest unit)
    pub min_bridge_amount: Uint128,
    /// Code id used to instantiate wrapped CW20 tokens
    pub cw20_code_id: u64,
}

/// Wrapped-asset registration held across the token instantiate submessage
#[cw_serde]
pub struct PendingWrapped {
    /// Foreign-chain asset identifier being registered
    pub foreign_id: [u8; 32],
    /// Symbol of the token being instantiated (for the reply event)
    pub symbol: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:guardian-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "0.1.0";

/// Reply id of the wrapped-token instantiate submessage
pub const REGISTER_WRAPPED_REPLY_ID: u64 = 1;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Custodied balance per asset id (denom or CW20 address).
/// Increases only on lock, decreases only on unlock or emergency withdrawal.
pub const LOCKED_BALANCES: Map<String, Uint128> = Map::new("locked_balances");

/// Consumed inbound nonces. Insert-only; membership is the sole replay
/// defense for signed instructions.
pub const PROCESSED_NONCES: Map<u64, bool> = Map::new("processed_nonces");

/// Outbound audit sequence, incremented once per successful lock or burn.
/// Never checked for uniqueness on input.
pub const OUTBOUND_SEQUENCE: Item<u64> = Item::new("outbound_sequence");

/// Per-asset minimum bridge amount overrides.
/// Falls back to `Config::min_bridge_amount` when absent.
pub const MIN_AMOUNTS: Map<String, Uint128> = Map::new("min_amounts");

// ============================================================================
// Wrapped Asset Registry
// ============================================================================

/// Foreign asset id (32 bytes) -> wrapped CW20 address
pub const WRAPPED_BY_FOREIGN: Map<&[u8], Addr> = Map::new("wrapped_by_foreign");

/// Wrapped CW20 address -> foreign asset id.
/// Written together with `WRAPPED_BY_FOREIGN` so both directions always agree.
pub const FOREIGN_BY_WRAPPED: Map<&Addr, [u8; 32]> = Map::new("foreign_by_wrapped");

/// Registration in flight across the instantiate submessage round trip
pub const PENDING_WRAPPED: Item<PendingWrapped> = Item::new("pending_wrapped");

// ============================================================================
// Helpers
// ============================================================================

/// Effective minimum bridge amount for an asset: the per-asset override if
/// configured, otherwise the config default.
pub fn min_amount(storage: &dyn Storage, config: &Config, asset_id: &str) -> StdResult<Uint128> {
    Ok(MIN_AMOUNTS
        .may_load(storage, asset_id.to_string())?
        .unwrap_or(config.min_bridge_amount))
}
