//! Shared signature helpers.

use alloy_primitives::{hex, keccak256, Address, B256};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::error::{RecoveryError, SigningError};

/// Offset added to the raw recovery id by the legacy `v` convention.
pub const LEGACY_V_OFFSET: u8 = 27;

/// Map the curve recovery id (0/1) to the legacy `v` (27/28).
///
/// Ids 2 and 3 (x-coordinate overflow) cannot be expressed in the legacy
/// scheme and are rejected, as is anything else.
pub fn normalize_recovery_id(recid: u8) -> Result<u8, SigningError> {
    match recid {
        0 | 1 => Ok(recid + LEGACY_V_OFFSET),
        other => Err(SigningError::InvalidRecoveryId(other)),
    }
}

/// Assemble `(r‖s, v)` into a 65-byte array.
pub(crate) fn assemble_signature(signature: &Signature, v: u8) -> [u8; 65] {
    let mut out = [0u8; 65];
    out[..64].copy_from_slice(&signature.to_bytes());
    out[64] = v;
    out
}

/// Render a 65-byte signature as `0x`-prefixed lowercase hex.
pub fn format_signature(signature: &[u8; 65]) -> String {
    hex::encode_prefixed(signature)
}

/// Ethereum address of a secp256k1 public key.
pub(crate) fn address_of(key: &VerifyingKey) -> Address {
    let uncompressed = key.to_encoded_point(false);
    let hash = keccak256(&uncompressed.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

/// Recover the signer address from a prehash and a 65-byte `r‖s‖v` signature.
///
/// `v` may be either 0/1 or 27/28.
pub(crate) fn recover_address(hash: &B256, signature: &[u8]) -> Result<Address, RecoveryError> {
    if signature.len() != 65 {
        return Err(RecoveryError::InvalidLength(signature.len()));
    }
    let v = signature[64];
    let recid = match v {
        0 | 1 => v,
        27 | 28 => v - LEGACY_V_OFFSET,
        other => return Err(RecoveryError::InvalidV(other)),
    };
    let sig = Signature::from_slice(&signature[..64]).map_err(|_| RecoveryError::Recover)?;
    let rid = RecoveryId::from_byte(recid).ok_or(RecoveryError::InvalidV(v))?;
    let key = VerifyingKey::recover_from_prehash(hash.as_slice(), &sig, rid)
        .map_err(|_| RecoveryError::Recover)?;
    Ok(address_of(&key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_parity_to_legacy_v() {
        assert_eq!(normalize_recovery_id(0), Ok(27));
        assert_eq!(normalize_recovery_id(1), Ok(28));
    }

    #[test]
    fn rejects_other_recovery_ids() {
        for recid in [2u8, 3, 27, 28, 255] {
            assert_eq!(normalize_recovery_id(recid), Err(SigningError::InvalidRecoveryId(recid)));
        }
    }

    #[test]
    fn formats_lowercase_prefixed_hex() {
        let mut raw = [0xabu8; 65];
        raw[64] = 27;
        let text = format_signature(&raw);
        assert_eq!(text.len(), 132);
        assert!(text.starts_with("0x"));
        assert!(text.ends_with("1b"));
        assert_eq!(text, text.to_lowercase());
    }

    #[test]
    fn recover_rejects_bad_shapes() {
        let hash = B256::repeat_byte(1);
        assert_eq!(recover_address(&hash, &[0u8; 64]), Err(RecoveryError::InvalidLength(64)));
        let mut sig = [1u8; 65];
        sig[64] = 29;
        assert_eq!(recover_address(&hash, &sig), Err(RecoveryError::InvalidV(29)));
    }
}
