//! Local signer backend.
//!
//! Holds a secp256k1 private key in memory. Key custody is the caller's job;
//! this type only parses and uses the scalar.

use alloy_primitives::{hex, Address, B256};
use alloy_signer_local::PrivateKeySigner;

use crate::{
    error::{KeyConversionError, SignerError, SigningError},
    payload_signer::PayloadSigner,
    util::{assemble_signature, normalize_recovery_id},
};

/// Length of a raw secp256k1 private scalar.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Local signer backed by an in-memory secp256k1 private key.
///
/// Immutable once built; signing takes `&self` and is safe to share.
#[derive(Clone, Debug)]
pub struct LocalSigner(PrivateKeySigner);

/// Opaque private key handle passed to [`crate::sign_claim`].
pub type KeyHandle = LocalSigner;

impl LocalSigner {
    /// Parse a hex-encoded private scalar.
    ///
    /// Accepts one optional `0x` prefix and surrounding whitespace. The value must decode to exactly 32
    /// bytes and be a non-zero scalar below the curve order. Mnemonic phrases
    /// are not accepted; derivation happens upstream.
    pub fn from_hex(pk_hex: &str) -> Result<Self, KeyConversionError> {
        // `hex::decode` strips a single `0x` prefix.
        let raw = hex::decode(pk_hex.trim()).map_err(|_| KeyConversionError::InvalidHex)?;
        if raw.len() != PRIVATE_KEY_LEN {
            return Err(KeyConversionError::InvalidLength(raw.len()));
        }
        let signer = PrivateKeySigner::from_bytes(&B256::from_slice(&raw))
            .map_err(|_| KeyConversionError::InvalidScalar)?;
        Ok(Self(signer))
    }

    /// Signs `hash` and returns `r‖s‖v` with `v` normalized to 27/28.
    pub fn sign_prehash(&self, hash: &B256) -> Result<[u8; 65], SigningError> {
        let (signature, recid) = self
            .0
            .credential()
            .sign_prehash_recoverable(hash.as_slice())
            .map_err(|e| SigningError::Curve(e.to_string()))?;
        let v = normalize_recovery_id(recid.to_byte())?;
        Ok(assemble_signature(&signature, v))
    }
}

impl PayloadSigner for LocalSigner {
    fn address(&self) -> Address {
        self.0.address()
    }

    fn sign_hash(&self, hash: B256) -> Result<[u8; 65], SignerError> {
        Ok(self.sign_prehash(&hash)?)
    }
}

/// Parse a hex private key into a [`KeyHandle`].
pub fn load_key(pk_hex: &str) -> Result<KeyHandle, SignerError> {
    Ok(LocalSigner::from_hex(pk_hex)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn loads_known_keys() {
        let one = load_key("0000000000000000000000000000000000000000000000000000000000000001").unwrap();
        assert_eq!(one.address(), address!("7E5F4552091A69125d5DfCb7b8C2659029395Bdf"));

        let dev = load_key(" 0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80\n").unwrap();
        assert_eq!(dev.address(), address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
    }

    #[test]
    fn rejects_non_hex() {
        assert!(matches!(
            load_key("not-hex"),
            Err(SignerError::KeyConversion(KeyConversionError::InvalidHex))
        ));
    }

    #[test]
    fn prefix_and_whitespace_are_tolerated() {
        let bare = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
        let expected = load_key(bare).unwrap().address();
        for input in [format!("0x{bare}"), format!("  0x{bare}\t\n"), format!("\n{bare} "), bare.to_uppercase()] {
            assert_eq!(load_key(&input).unwrap().address(), expected, "{input:?}");
        }
    }

    #[test]
    fn rejects_malformed_prefixes() {
        let bare = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
        for input in ["0x0".to_owned(), "0".to_owned(), format!("0x0x{bare}"), format!("0x {bare}"), format!("{bare}0")] {
            assert!(
                matches!(load_key(&input), Err(SignerError::KeyConversion(KeyConversionError::InvalidHex))),
                "{input:?}"
            );
        }
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            load_key("00"),
            Err(SignerError::KeyConversion(KeyConversionError::InvalidLength(1)))
        ));
        assert!(matches!(
            load_key(&"11".repeat(33)),
            Err(SignerError::KeyConversion(KeyConversionError::InvalidLength(33)))
        ));
        assert!(matches!(load_key(""), Err(SignerError::KeyConversion(KeyConversionError::InvalidLength(0)))));
    }

    #[test]
    fn rejects_out_of_range_scalars() {
        let zero = "00".repeat(32);
        let order = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
        for key in [zero.as_str(), order, &"ff".repeat(32)] {
            assert!(matches!(
                load_key(key),
                Err(SignerError::KeyConversion(KeyConversionError::InvalidScalar))
            ));
        }
    }

    #[test]
    fn signature_v_is_legacy() {
        let signer = load_key(&"42".repeat(32)).unwrap();
        for i in 0..32u8 {
            let sig = signer.sign_hash(B256::repeat_byte(i)).unwrap();
            assert!(sig[64] == 27 || sig[64] == 28, "v = {}", sig[64]);
        }
    }
}
