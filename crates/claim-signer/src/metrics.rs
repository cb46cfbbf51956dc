//! Prometheus-style metrics for claim signing.
//!
//! Handles are registered against whatever `metrics` recorder the host binary
//! installs; without one they are no-ops.

use metrics::{counter, histogram, Counter, Histogram};

/// Metrics recorded by [`crate::ClaimSigner`].
#[derive(Clone)]
pub struct SignerMetrics {
    /// Total claims signed successfully.
    pub signatures_total: Counter,
    /// Total claims rejected by encoding or signing.
    pub failures_total: Counter,
    /// Time spent encoding, hashing and signing one claim, in seconds.
    pub sign_latency_seconds: Histogram,
}

impl Default for SignerMetrics {
    fn default() -> Self {
        Self {
            signatures_total: counter!("claim_signer_signatures_total"),
            failures_total: counter!("claim_signer_failures_total"),
            sign_latency_seconds: histogram!("claim_signer_sign_latency_seconds"),
        }
    }
}

impl core::fmt::Debug for SignerMetrics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SignerMetrics").finish_non_exhaustive()
    }
}
