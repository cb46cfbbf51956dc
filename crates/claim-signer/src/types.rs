//! Claim request and response types.
//!
//! JSON form uses camelCase keys. 256-bit integers travel as decimal strings,
//! byte strings and addresses as `0x` hex.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Parameters of a reward claim to be authorized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    /// Caller-chosen replay token, packed as ABI `bytes`.
    pub nonce: Bytes,
    /// Amount in the reward token's smallest unit.
    #[serde(with = "u256_decimal")]
    pub amount: U256,
    /// Claimant.
    pub user: Address,
    /// Unix seconds.
    #[serde(with = "u256_decimal")]
    pub expire_at: U256,
    /// Contract instance the claim is scoped to.
    pub reward_contract: Address,
    /// Purpose discriminator interpreted by the contract.
    #[serde(with = "u256_decimal")]
    pub use_for: U256,
}

/// A signed claim as returned to the claimant.
///
/// `reward_contract` and `use_for` are covered by the signature but not echoed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub nonce: Bytes,
    pub user: Address,
    #[serde(with = "u256_decimal")]
    pub amount: U256,
    #[serde(with = "u256_decimal")]
    pub expire_at: U256,
    /// `0x`-prefixed hex of `r ‖ s ‖ v`, `v` in {27, 28}.
    pub signature: String,
}

impl ClaimResponse {
    /// Build the response for `request` carrying `signature`.
    pub fn from_request(request: &ClaimRequest, signature: String) -> Self {
        Self {
            nonce: request.nonce.clone(),
            user: request.user,
            amount: request.amount,
            expire_at: request.expire_at,
            signature,
        }
    }
}

/// Decimal string (de)serialization for `U256`. Also accepts `0x` hex strings
/// and plain JSON integers on input.
mod u256_decimal {
    use alloy_primitives::U256;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    pub(super) fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => crate::encoding::parse_uint256(&text).map_err(D::Error::custom),
            Raw::Number(n) => Ok(U256::from(n)),
        }
    }
}
