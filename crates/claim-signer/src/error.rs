//! Error types for claim encoding, signing and key loading.

use thiserror::Error;

/// A claim field could not be represented in the contract encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("invalid integer '{0}'")]
    InvalidInteger(String),
    #[error("integer '{0}' does not fit in 256 bits")]
    Overflow(String),
    #[error("malformed claim: {0}")]
    MalformedClaim(String),
}

/// The curve operation failed or produced an unusable signature.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SigningError {
    #[error("ecdsa: {0}")]
    Curve(String),
    #[error("unexpected recovery id {0}, expected 0 or 1")]
    InvalidRecoveryId(u8),
}

/// Key material could not be turned into a secp256k1 private key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyConversionError {
    #[error("private key is not valid hex")]
    InvalidHex,
    #[error("private key must be 32 bytes, got {0}")]
    InvalidLength(usize),
    #[error("private key is not a valid secp256k1 scalar")]
    InvalidScalar,
}

/// A signature could not be parsed or did not recover to a public key.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecoveryError {
    #[error("signature is not valid hex")]
    InvalidHex,
    #[error("signature must be 65 bytes, got {0}")]
    InvalidLength(usize),
    #[error("unsupported recovery byte {0}")]
    InvalidV(u8),
    #[error("public key recovery failed")]
    Recover,
}

#[derive(Debug, Error)]
pub enum SignerError {
    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),
    #[error("key conversion error: {0}")]
    KeyConversion(#[from] KeyConversionError),
    #[error("recovery error: {0}")]
    Recovery(#[from] RecoveryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("key '{0}' not found in registry")]
    KeyNotFound(String),
    #[error("duplicate key name '{0}' in config file")]
    DuplicateKey(String),
    #[error("no key source provided for '{0}'")]
    MissingKeySource(String),
    #[error("env var '{var}' for key '{name}' is not set or not unicode")]
    EnvVarUnset { name: String, var: String },
}
