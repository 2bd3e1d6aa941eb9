//! Hashing and fixed-width encoding helpers.
//!
//! Every field of a signed instruction is encoded as a 32-byte big-endian
//! word so the byte layout is reproducible by off-chain signers:
//! - native denoms hash to their keccak256 digest
//! - addresses are canonicalized and left-padded to 32 bytes
//! - amounts (u128) and nonces (u64) are left-padded big-endian integers

use common::AssetInfo;
use cosmwasm_std::{Addr, Deps, StdError, StdResult};
use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Encode a u128 amount as a 32-byte big-endian word (left-padded)
pub fn u128_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a u64 nonce as a 32-byte big-endian word (left-padded)
pub fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encode a local address as 32 bytes (canonical form, left-padded)
pub fn encode_address(deps: Deps, addr: &Addr) -> StdResult<[u8; 32]> {
    let canonical = deps.api.addr_canonicalize(addr.as_str())?;
    let bytes = canonical.as_slice();
    if bytes.len() > 32 {
        return Err(StdError::generic_err(format!(
            "canonical address is {} bytes, exceeds 32",
            bytes.len()
        )));
    }

    let mut result = [0u8; 32];
    let start = 32 - bytes.len();
    result[start..].copy_from_slice(bytes);
    Ok(result)
}

/// Encode an asset identifier as 32 bytes.
///
/// Native denoms hash to keccak256 of the denom string; CW20 tokens use the
/// left-padded canonical address.
pub fn encode_asset_key(deps: Deps, asset: &AssetInfo) -> StdResult<[u8; 32]> {
    match asset {
        AssetInfo::Native { denom } => Ok(keccak256(denom.as_bytes())),
        AssetInfo::Cw20 { contract_addr } => encode_address(deps, contract_addr),
    }
}

/// Convert 32-byte value to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse hex string (with or without 0x prefix) to a 32-byte array
pub fn hex_to_bytes32(input: &str) -> Result<[u8; 32], &'static str> {
    let input = input.strip_prefix("0x").unwrap_or(input);
    if input.len() != 64 {
        return Err("Invalid hex length: expected 64 characters");
    }

    let bytes = hex::decode(input).map_err(|_| "Invalid hex character")?;
    let mut result = [0u8; 32];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Parse hex string (with or without 0x prefix) to a 20-byte address
pub fn hex_to_address20(input: &str) -> Result<[u8; 20], &'static str> {
    let input = input.strip_prefix("0x").unwrap_or(input);
    if input.len() != 40 {
        return Err("Invalid hex length: expected 40 characters");
    }

    let bytes = hex::decode(input).map_err(|_| "Invalid hex character")?;
    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}
