//! Validator signature verification.
//!
//! Inbound instructions (unlock, mint) carry a 65-byte `r || s || v`
//! secp256k1 signature produced by the validator over a canonical message.
//! The canonical message is the concatenation of the instruction's fields in
//! declared order, each as a 32-byte word (see [`crate::hash`]), terminated
//! by a literal ASCII domain tag unique to the instruction type. The message
//! is keccak256-hashed, wrapped with the standard personal-message prefix,
//! hashed again, and the signer is recovered from that digest.
//!
//! Field order and the domain tags are part of the wire contract with
//! off-chain signers; changing either breaks interoperability.

use cosmwasm_std::{Api, Deps};

use crate::error::ContractError;
use crate::hash::{keccak256, u128_word, u64_word};

/// Domain tag terminating unlock-authorization messages
pub const UNLOCK_TAG: &[u8] = b"unlock";

/// Domain tag terminating mint-authorization messages
pub const MINT_TAG: &[u8] = b"mint";

/// Personal-message prefix applied before recovery
const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

// ============================================================================
// Canonical Messages
// ============================================================================

/// Canonical unlock-authorization message:
/// `asset_key || amount || recipient || nonce || "unlock"`.
pub fn unlock_message(
    asset_key: &[u8; 32],
    amount: u128,
    recipient: &[u8; 32],
    nonce: u64,
) -> Vec<u8> {
    let mut message = Vec::with_capacity(4 * 32 + UNLOCK_TAG.len());
    message.extend_from_slice(asset_key);
    message.extend_from_slice(&u128_word(amount));
    message.extend_from_slice(recipient);
    message.extend_from_slice(&u64_word(nonce));
    message.extend_from_slice(UNLOCK_TAG);
    message
}

/// Canonical mint-authorization message:
/// `wrapped_key || amount || recipient || foreign_id || nonce || "mint"`.
pub fn mint_message(
    wrapped_key: &[u8; 32],
    amount: u128,
    recipient: &[u8; 32],
    foreign_id: &[u8; 32],
    nonce: u64,
) -> Vec<u8> {
    let mut message = Vec::with_capacity(5 * 32 + MINT_TAG.len());
    message.extend_from_slice(wrapped_key);
    message.extend_from_slice(&u128_word(amount));
    message.extend_from_slice(recipient);
    message.extend_from_slice(foreign_id);
    message.extend_from_slice(&u64_word(nonce));
    message.extend_from_slice(MINT_TAG);
    message
}

// ============================================================================
// Recovery
// ============================================================================

/// Hash a canonical message and wrap it with the personal-message prefix.
pub fn signed_digest(message: &[u8]) -> [u8; 32] {
    let inner = keccak256(message);
    let mut data = Vec::with_capacity(SIGNED_MESSAGE_PREFIX.len() + 32);
    data.extend_from_slice(SIGNED_MESSAGE_PREFIX);
    data.extend_from_slice(&inner);
    keccak256(&data)
}

/// Recover the 20-byte signer address from a 65-byte `r || s || v` signature.
pub fn recover_signer(
    api: &dyn Api,
    digest: &[u8; 32],
    signature: &[u8],
) -> Result<[u8; 20], ContractError> {
    if signature.len() != 65 {
        return Err(ContractError::InvalidSignature {
            reason: format!("expected 65 bytes, got {}", signature.len()),
        });
    }

    let recovery_param = match signature[64] {
        0 | 27 => 0,
        1 | 28 => 1,
        other => {
            return Err(ContractError::InvalidSignature {
                reason: format!("invalid recovery byte {other}"),
            })
        }
    };

    let pubkey = api
        .secp256k1_recover_pubkey(digest, &signature[..64], recovery_param)
        .map_err(|e| ContractError::InvalidSignature {
            reason: e.to_string(),
        })?;

    // Uncompressed pubkey: 0x04 tag byte followed by the 64-byte key body
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

/// Verify the configured validator signed `message`.
pub fn assert_validator(
    deps: Deps,
    message: &[u8],
    signature: &[u8],
    validator: &[u8; 20],
) -> Result<(), ContractError> {
    let digest = signed_digest(message);
    let recovered = recover_signer(deps.api, &digest, signature)?;
    if recovered != *validator {
        return Err(ContractError::UnauthorizedSigner);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use k256::ecdsa::SigningKey;
    use k256::elliptic_curve::sec1::ToEncodedPoint;

    fn signing_key() -> SigningKey {
        SigningKey::from_slice(&[7u8; 32]).unwrap()
    }

    fn signer_address(key: &SigningKey) -> [u8; 20] {
        let point = key.verifying_key().to_encoded_point(false);
        let hash = keccak256(&point.as_bytes()[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash[12..]);
        address
    }

    fn sign(key: &SigningKey, digest: &[u8; 32]) -> Vec<u8> {
        let (signature, recovery_id) = key.sign_prehash_recoverable(digest).unwrap();
        let mut out = signature.to_vec();
        out.push(recovery_id.to_byte() + 27);
        out
    }

    /// The message byte layout is a wire contract; pin it explicitly.
    #[test]
    fn unlock_message_layout() {
        let asset_key = keccak256(b"uluna");
        let recipient = [0xAB; 32];
        let message = unlock_message(&asset_key, 1_000_000, &recipient, 7);

        assert_eq!(message.len(), 128 + 6);
        assert_eq!(&message[0..32], &asset_key);
        assert_eq!(&message[32..64], &u128_word(1_000_000));
        assert_eq!(&message[64..96], &recipient);
        assert_eq!(&message[96..128], &u64_word(7));
        assert_eq!(&message[128..], b"unlock");
    }

    #[test]
    fn mint_message_layout() {
        let wrapped_key = [0x11; 32];
        let recipient = [0x22; 32];
        let foreign_id = [0x33; 32];
        let message = mint_message(&wrapped_key, 500, &recipient, &foreign_id, 9);

        assert_eq!(message.len(), 160 + 4);
        assert_eq!(&message[0..32], &wrapped_key);
        assert_eq!(&message[32..64], &u128_word(500));
        assert_eq!(&message[64..96], &recipient);
        assert_eq!(&message[96..128], &foreign_id);
        assert_eq!(&message[128..160], &u64_word(9));
        assert_eq!(&message[160..], b"mint");
    }

    #[test]
    fn recovers_signer_address() {
        let deps = mock_dependencies();
        let key = signing_key();
        let message = unlock_message(&keccak256(b"uluna"), 1000, &[0xCD; 32], 1);
        let digest = signed_digest(&message);
        let signature = sign(&key, &digest);

        let recovered = recover_signer(deps.as_ref().api, &digest, &signature).unwrap();
        assert_eq!(recovered, signer_address(&key));
    }

    #[test]
    fn accepts_validator_signature() {
        let deps = mock_dependencies();
        let key = signing_key();
        let validator = signer_address(&key);
        let message = unlock_message(&keccak256(b"uluna"), 1000, &[0xCD; 32], 1);
        let signature = sign(&key, &signed_digest(&message));

        assert_validator(deps.as_ref(), &message, &signature, &validator).unwrap();
    }

    #[test]
    fn rejects_other_signer() {
        let deps = mock_dependencies();
        let key = signing_key();
        let validator = signer_address(&key);
        let intruder = SigningKey::from_slice(&[9u8; 32]).unwrap();
        let message = unlock_message(&keccak256(b"uluna"), 1000, &[0xCD; 32], 1);
        let signature = sign(&intruder, &signed_digest(&message));

        let err = assert_validator(deps.as_ref(), &message, &signature, &validator).unwrap_err();
        assert_eq!(err, ContractError::UnauthorizedSigner);
    }

    #[test]
    fn rejects_tampered_message() {
        let deps = mock_dependencies();
        let key = signing_key();
        let validator = signer_address(&key);
        let message = unlock_message(&keccak256(b"uluna"), 1000, &[0xCD; 32], 1);
        let signature = sign(&key, &signed_digest(&message));

        // Same fields, different amount
        let tampered = unlock_message(&keccak256(b"uluna"), 2000, &[0xCD; 32], 1);
        let err = assert_validator(deps.as_ref(), &tampered, &signature, &validator).unwrap_err();
        assert_eq!(err, ContractError::UnauthorizedSigner);
    }

    #[test]
    fn rejects_malformed_signature() {
        let deps = mock_dependencies();
        let digest = signed_digest(b"anything");

        let err = recover_signer(deps.as_ref().api, &digest, &[0u8; 64]).unwrap_err();
        assert!(matches!(err, ContractError::InvalidSignature { .. }));

        let mut bad_recovery = vec![0u8; 65];
        bad_recovery[64] = 5;
        let err = recover_signer(deps.as_ref().api, &digest, &bad_recovery).unwrap_err();
        assert!(matches!(err, ContractError::InvalidSignature { .. }));
    }

    /// v is accepted both raw (0/1) and with the legacy 27 offset.
    #[test]
    fn normalizes_recovery_byte() {
        let deps = mock_dependencies();
        let key = signing_key();
        let message = mint_message(&[0x11; 32], 500, &[0x22; 32], &[0x33; 32], 2);
        let digest = signed_digest(&message);

        let mut signature = sign(&key, &digest);
        let recovered_offset = recover_signer(deps.as_ref().api, &digest, &signature).unwrap();
        signature[64] -= 27;
        let recovered_raw = recover_signer(deps.as_ref().api, &digest, &signature).unwrap();
        assert_eq!(recovered_offset, recovered_raw);
    }
}
