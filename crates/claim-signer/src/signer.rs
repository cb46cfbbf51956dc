//! Claim signing entry points.
//!
//! [`sign_claim`] is the pure core: encode, hash twice, sign. [`ClaimSigner`]
//! wraps any [`PayloadSigner`] with logging and metrics for service use.

use std::{sync::Arc, time::Instant};

use tracing::{debug, error};

use crate::{
    error::{EncodingError, SignerError},
    hashing::claim_signing_hash,
    local::KeyHandle,
    metrics::SignerMetrics,
    payload_signer::PayloadSigner,
    types::{ClaimRequest, ClaimResponse},
    util::format_signature,
};

/// Sign `request` with `key`.
///
/// Deterministic: the same request and key always give the same signature.
pub fn sign_claim(request: &ClaimRequest, key: &KeyHandle) -> Result<ClaimResponse, SignerError> {
    sign_with(request, key)
}

fn sign_with<S: PayloadSigner + ?Sized>(
    request: &ClaimRequest,
    signer: &S,
) -> Result<ClaimResponse, SignerError> {
    let hash = claim_signing_hash(request);
    let signature = signer.sign_hash(hash)?;
    Ok(ClaimResponse::from_request(request, format_signature(&signature)))
}

/// Signs claims with a shared [`PayloadSigner`].
#[derive(Clone)]
pub struct ClaimSigner {
    signer: Arc<dyn PayloadSigner>,
    metrics: SignerMetrics,
}

impl core::fmt::Debug for ClaimSigner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ClaimSigner").field("address", &self.signer.address()).finish()
    }
}

impl ClaimSigner {
    pub fn new(signer: Arc<dyn PayloadSigner>) -> Self {
        Self { signer, metrics: SignerMetrics::default() }
    }

    /// Address the contract must be configured with.
    pub fn address(&self) -> alloy_primitives::Address {
        self.signer.address()
    }

    /// Sign a single claim.
    pub fn sign(&self, request: &ClaimRequest) -> Result<ClaimResponse, SignerError> {
        let start = Instant::now();
        let result = sign_with(request, self.signer.as_ref());
        self.metrics.sign_latency_seconds.record(start.elapsed().as_secs_f64());

        match &result {
            Ok(_) => {
                self.metrics.signatures_total.increment(1);
                debug!(
                    target: "claim_signer",
                    user = %request.user,
                    reward_contract = %request.reward_contract,
                    signer = %self.signer.address(),
                    "claim signed"
                );
            }
            Err(err) => {
                self.metrics.failures_total.increment(1);
                error!(target: "claim_signer", %err, user = %request.user, "error signing claim");
            }
        }
        result
    }

    /// Sign a JSON-encoded [`ClaimRequest`] and return the JSON [`ClaimResponse`].
    pub fn sign_json(&self, request: &str) -> Result<String, SignerError> {
        let request: ClaimRequest = serde_json::from_str(request).map_err(|e| {
            self.metrics.failures_total.increment(1);
            error!(target: "claim_signer", err = %e, "malformed claim request");
            EncodingError::MalformedClaim(e.to_string())
        })?;
        let response = self.sign(&request)?;
        Ok(serde_json::to_string(&response)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::SigningError, local::load_key};
    use alloy_primitives::{address, bytes, Address, B256, U256};

    struct BrokenSigner;

    impl PayloadSigner for BrokenSigner {
        fn address(&self) -> Address {
            Address::ZERO
        }

        fn sign_hash(&self, _hash: B256) -> Result<[u8; 65], SignerError> {
            Err(SigningError::Curve("unavailable".into()).into())
        }
    }

    fn request() -> ClaimRequest {
        ClaimRequest {
            nonce: bytes!("deadbeef"),
            amount: U256::from(5u64),
            user: address!("1111111111111111111111111111111111111111"),
            expire_at: U256::from(1_800_000_000u64),
            reward_contract: address!("2222222222222222222222222222222222222222"),
            use_for: U256::from(3u64),
        }
    }

    #[test]
    fn service_matches_core() {
        let key = load_key(&"07".repeat(32)).unwrap();
        let service = ClaimSigner::new(Arc::new(key.clone()));
        assert_eq!(service.address(), key.address());
        assert_eq!(service.sign(&request()).unwrap(), sign_claim(&request(), &key).unwrap());
    }

    #[test]
    fn response_echoes_request() {
        let key = load_key(&"07".repeat(32)).unwrap();
        let response = sign_claim(&request(), &key).unwrap();
        assert_eq!(response.nonce, request().nonce);
        assert_eq!(response.user, request().user);
        assert_eq!(response.amount, request().amount);
        assert_eq!(response.expire_at, request().expire_at);
        assert_eq!(response.signature.len(), 132);
    }

    #[test]
    fn backend_failure_is_surfaced() {
        let service = ClaimSigner::new(Arc::new(BrokenSigner));
        let err = service.sign(&request()).unwrap_err();
        assert!(matches!(err, SignerError::Signing(SigningError::Curve(_))));
    }

    #[test]
    fn sign_json_round_trip() {
        let key = load_key(&"07".repeat(32)).unwrap();
        let service = ClaimSigner::new(Arc::new(key.clone()));
        let input = serde_json::to_string(&request()).unwrap();
        let output: ClaimResponse = serde_json::from_str(&service.sign_json(&input).unwrap()).unwrap();
        assert_eq!(output, sign_claim(&request(), &key).unwrap());
    }

    #[test]
    fn sign_json_rejects_malformed_claims() {
        let service = ClaimSigner::new(Arc::new(load_key(&"07".repeat(32)).unwrap()));
        let err = service.sign_json(r#"{"nonce":"0x"}"#).unwrap_err();
        assert!(matches!(err, SignerError::Encoding(EncodingError::MalformedClaim(_))));

        let mut claim = serde_json::to_value(request()).unwrap();
        claim["amount"] = "_".into();
        let err = service.sign_json(&claim.to_string()).unwrap_err();
        assert!(matches!(err, SignerError::Encoding(EncodingError::MalformedClaim(_))));
    }
}
