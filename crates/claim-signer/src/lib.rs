//! Reward claim signatures for on-chain redemption.
//!
//! A claim is packed as
//! `abi.encode(user, useFor, amount, expireAt, nonce, rewardContract)`,
//! hashed with Keccak-256, re-hashed under the personal-sign prefix and signed
//! with secp256k1. The contract repeats the encoding and hashing and compares
//! the `ecrecover` result against its configured authority.
//!
//! Exposes:
//! * `encoding`: contract parameter layout
//! * `hashing`: content hash and personal-sign hash
//! * `local`: hex private key loading and the in-memory signer
//! * `signer`: [`sign_claim`] and the [`ClaimSigner`] service wrapper
//! * `registry`: JSON-configured named signers
//! * `verify`: off-chain signer recovery
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod encoding;
pub mod error;
pub mod hashing;
pub mod local;
pub mod metrics;
pub mod payload_signer;
pub mod registry;
pub mod signer;
pub mod types;
pub mod util;
pub mod verify;

pub use error::{EncodingError, KeyConversionError, RecoveryError, SignerError, SigningError};
pub use local::{load_key, KeyHandle, LocalSigner};
pub use payload_signer::PayloadSigner;
pub use registry::SignerRegistry;
pub use signer::{sign_claim, ClaimSigner};
pub use types::{ClaimRequest, ClaimResponse};
pub use verify::{recover_claim_signer, verify_claim};
