//! Off-chain mirror of the contract's signature check.

use alloy_primitives::{hex, Address};

use crate::{
    error::{RecoveryError, SignerError},
    hashing::claim_signing_hash,
    types::ClaimRequest,
    util::recover_address,
};

/// Recompute the signing hash of `request` and recover the address that
/// produced `signature` (`0x`-prefixed hex of `r‖s‖v`).
///
/// A tampered request recovers to some unrelated address rather than failing,
/// so callers must compare the result against the expected authority.
pub fn recover_claim_signer(request: &ClaimRequest, signature: &str) -> Result<Address, SignerError> {
    let raw = hex::decode(signature.trim()).map_err(|_| RecoveryError::InvalidHex)?;
    let hash = claim_signing_hash(request);
    Ok(recover_address(&hash, &raw)?)
}

/// `true` if `signature` over `request` recovers to `expected`.
pub fn verify_claim(request: &ClaimRequest, signature: &str, expected: Address) -> Result<bool, SignerError> {
    Ok(recover_claim_signer(request, signature)? == expected)
}
