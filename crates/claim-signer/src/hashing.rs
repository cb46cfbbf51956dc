//! Two-stage claim hashing.
//!
//! `H  = keccak256(abi.encode(...))`
//! `H' = keccak256("\x19Ethereum Signed Message:\n32" ‖ H)`
//!
//! Only `H'` is ever signed. It is what both the contract's `ecrecover` path and
//! personal-sign wallet tooling expect for a 32-byte message.

use alloy_primitives::{keccak256, Keccak256, B256};

use crate::{encoding::encode_claim_params, types::ClaimRequest};

/// Personal-sign prefix for a 32-byte message.
pub const SIGNED_MESSAGE_PREFIX: &[u8; 28] = b"\x19Ethereum Signed Message:\n32";

/// Stage 1: Keccak-256 of the encoded claim.
#[inline]
pub fn content_hash(encoded: impl AsRef<[u8]>) -> B256 {
    keccak256(encoded)
}

/// Stage 2: Keccak-256 of the personal-sign prefix followed by `content_hash`.
pub fn signing_hash(content_hash: B256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(SIGNED_MESSAGE_PREFIX);
    hasher.update(content_hash);
    hasher.finalize()
}

/// Encode `request` and run both hash stages.
pub fn claim_signing_hash(request: &ClaimRequest) -> B256 {
    signing_hash(content_hash(encode_claim_params(request)))
}
