//! Key configuration
//!
//! Keys usually arrive as Base64 text in a configuration file or an
//! environment variable. [`KeyConfig`] is the serde shape of such a key:
//!
//! ```json
//! { "algorithm": "AES", "key": "K34VFiiu0qar9xWICc9PPA==" }
//! ```
//!
//! `algorithm` defaults to `"AES"` when omitted.

use core::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::decrypter::Decrypter;
use crate::encrypter::Encrypter;
use crate::error::Result;
use crate::key::SecretKey;
use tokencrypt_params::utils::symmetric::AES_ALGORITHM;

fn default_algorithm() -> String {
    AES_ALGORITHM.to_string()
}

/// A key as written in configuration
#[derive(Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct KeyConfig {
    /// Algorithm name the key belongs to
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    /// Base64-encoded key material
    pub key: String,
}

impl KeyConfig {
    /// Decodes the key material
    pub fn secret_key(&self) -> Result<SecretKey> {
        SecretKey::from_base64(self.algorithm.as_str(), &self.key)
    }

    /// Builds an encrypter with this key as its default
    pub fn encrypter(&self) -> Result<Encrypter> {
        self.secret_key().map(Encrypter::with_key)
    }

    /// Builds a decrypter with this key as its default
    pub fn decrypter(&self) -> Result<Decrypter> {
        self.secret_key().map(Decrypter::with_key)
    }
}

impl From<&SecretKey> for KeyConfig {
    fn from(key: &SecretKey) -> Self {
        Self {
            algorithm: key.algorithm().to_string(),
            key: key.to_base64().to_string(),
        }
    }
}

impl fmt::Debug for KeyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyConfig")
            .field("algorithm", &self.algorithm)
            .field("key", &"[REDACTED]")
            .finish()
    }
}
