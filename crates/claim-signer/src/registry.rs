//! Named signer registry loaded from a JSON configuration file.
//!
//! ```json
//! {
//!   "default_key": "rewards",
//!   "keys": [
//!     { "name": "rewards", "backend": "local", "private_key_hex": "0x…" },
//!     { "name": "ops", "backend": "local", "env_var": "OPS_SIGNER_KEY" }
//!   ]
//! }
//! ```
//!
//! Use [`SignerRegistry::from_config`] to load it at runtime.

use core::fmt;
use std::{collections::HashMap, fs, path::Path, sync::Arc};

use serde::Deserialize;
use tracing::{info, warn};

use crate::{error::SignerError, local::LocalSigner, payload_signer::PayloadSigner, signer::ClaimSigner};

// === Config parsing ========================================================
#[derive(Debug, Deserialize)]
struct SignerFile {
    default_key: String,
    keys: Vec<KeyEntry>,
}

#[derive(Debug, Deserialize)]
struct KeyEntry {
    name: String,
    #[serde(flatten)]
    cfg: KeyConfig,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
enum KeyConfig {
    /// Key held in memory on this host. One of the sources must be set;
    /// `private_key_hex` wins if both are.
    Local {
        #[serde(default)]
        private_key_hex: Option<String>,
        /// Name of an env var that contains the hex key.
        #[serde(default)]
        env_var: Option<String>,
    },
}

impl KeyConfig {
    fn build_signer(self, name: &str) -> Result<LocalSigner, SignerError> {
        match self {
            Self::Local { private_key_hex, env_var } => {
                let pk_hex = match (private_key_hex, env_var) {
                    (Some(hex), _) => hex,
                    (None, Some(var)) => std::env::var(&var)
                        .map_err(|_| SignerError::EnvVarUnset { name: name.to_owned(), var })?,
                    (None, None) => return Err(SignerError::MissingKeySource(name.to_owned())),
                };
                Ok(LocalSigner::from_hex(&pk_hex)?)
            }
        }
    }
}

// === Registry ==============================================================

/// Holds a map of signers keyed by name.
pub struct SignerRegistry {
    signers: HashMap<String, Arc<dyn PayloadSigner>>,
    default: String,
}

impl fmt::Debug for SignerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&String> = self.signers.keys().collect();
        f.debug_struct("SignerRegistry")
            .field("keys", &keys)
            .field("default", &self.default)
            .finish()
    }
}

impl SignerRegistry {
    /// Load the registry from a JSON configuration file.
    pub fn from_config(path: impl AsRef<Path>) -> Result<Self, SignerError> {
        let text = fs::read_to_string(&path)?;
        let registry = Self::from_json(&text)?;
        info!(target: "claim_signer", "Loaded {} signer(s) from {:?}", registry.signers.len(), path.as_ref());
        Ok(registry)
    }

    /// Build the registry from the JSON text of a configuration file.
    pub fn from_json(text: &str) -> Result<Self, SignerError> {
        let file: SignerFile = serde_json::from_str(text)?;

        let mut signers: HashMap<String, Arc<dyn PayloadSigner>> = HashMap::with_capacity(file.keys.len());
        for entry in file.keys {
            if signers.contains_key(&entry.name) {
                return Err(SignerError::DuplicateKey(entry.name));
            }
            let signer = entry.cfg.build_signer(&entry.name)?;
            warn!(
                target: "claim_signer",
                "Using local signer '{}' ({}), key material is held in process memory",
                entry.name,
                signer.address()
            );
            signers.insert(entry.name, Arc::new(signer));
        }

        if !signers.contains_key(&file.default_key) {
            return Err(SignerError::KeyNotFound(file.default_key));
        }
        Ok(Self { signers, default: file.default_key })
    }

    /// Returns the requested signer or the default one if `name` is `None`.
    pub fn get(&self, name: Option<&str>) -> Result<Arc<dyn PayloadSigner>, SignerError> {
        let key = name.unwrap_or(&self.default);
        self.signers
            .get(key)
            .cloned()
            .ok_or_else(|| SignerError::KeyNotFound(key.to_owned()))
    }

    /// [`ClaimSigner`] for the requested (or default) key.
    pub fn claim_signer(&self, name: Option<&str>) -> Result<ClaimSigner, SignerError> {
        self.get(name).map(ClaimSigner::new)
    }
}
