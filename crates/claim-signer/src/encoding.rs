//! Contract-side parameter encoding.
//!
//! The claim is packed exactly as the verifying contract does it:
//!
//! ```text
//! abi.encode(user, useFor, amount, expireAt, nonce, address(this))
//! ```
//!
//! i.e. `(address, uint256, uint256, uint256, bytes, address)` with the standard
//! head/tail layout. The six head slots are 32 bytes each, the `bytes` slot holds
//! the tail offset (`0xc0`), and the tail is the nonce length followed by the
//! nonce zero-padded to a multiple of 32 bytes.
//!
//! Reordering or retyping any field changes the digest and the contract
//! recovers a different address. There is no local symptom.

use alloy_primitives::{
    ruint::{BaseConvertError, ParseError},
    Bytes, U256,
};
use alloy_sol_types::SolValue;

use crate::{error::EncodingError, types::ClaimRequest};

/// ABI-encode the claim parameters in contract order.
pub fn encode_claim_params(request: &ClaimRequest) -> Bytes {
    (
        request.user,
        request.use_for,
        request.amount,
        request.expire_at,
        request.nonce.clone(),
        request.reward_contract,
    )
        .abi_encode_params()
        .into()
}

/// Parse a `uint256` from its textual form.
///
/// Decimal by default, hex with a `0x` prefix. Values wider than 256 bits are
/// rejected.
pub fn parse_uint256(text: &str) -> Result<U256, EncodingError> {
    let trimmed = text.trim();
    let (digits, radix) = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };
    let valid_digit = |c: char| if radix == 16 { c.is_ascii_hexdigit() } else { c.is_ascii_digit() };
    if digits.is_empty() || !digits.chars().all(valid_digit) {
        return Err(EncodingError::InvalidInteger(text.to_owned()));
    }
    U256::from_str_radix(digits, radix).map_err(|err| match err {
        ParseError::BaseConvertError(BaseConvertError::Overflow) => {
            EncodingError::Overflow(text.to_owned())
        }
        _ => EncodingError::InvalidInteger(text.to_owned()),
    })
}
