//! -----------------------------------------------------------------------------
//! Created by **Jonathan Okz – BaaS.sh corporate**
//! -----------------------------------------------------------------------------
//!
//! Trait for signing claim payloads.
//!
//! A `PayloadSigner` only ever sees the final personal-sign hash `H'` of a
//! claim. It must return the **compact** 65-byte seal:
//!
//! ```text
//! | 32 bytes r | 32 bytes s | 1 byte v (27 or 28) |
//! ```
//!
//! Implementations are free to provide the signing backend of their choice
//! (in-memory key, HSM, remote signer …) as long as `v` follows the legacy
//! 27/28 offset expected by the contract's `ecrecover`.

use alloy_primitives::{Address, B256};

use crate::error::SignerError;

/// A type that can sign a 32-byte hash and expose its Ethereum address.
pub trait PayloadSigner: Send + Sync + 'static {
    /// Returns the 20-byte address corresponding to the signer public key.
    fn address(&self) -> Address;

    /// Signs the given prefixed hash. Must return `r‖s‖v` with `v` in {27, 28}.
    fn sign_hash(&self, hash: B256) -> Result<[u8; 65], SignerError>;
}
