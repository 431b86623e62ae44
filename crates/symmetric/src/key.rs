//! Caller-owned secret keys
//!
//! A [`SecretKey`] is opaque key material plus the name of the algorithm it
//! belongs to, the pair a caller hands to an encrypter or decrypter. The key
//! is not checked against any cipher until it is used; a wrong length or
//! algorithm surfaces as a failed encryption or decryption.

use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::encoding;
use crate::error::{Error, Result};
use tokencrypt_params::utils::symmetric::AES_ALGORITHM;

/// Secret key material tagged with its algorithm name
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    algorithm: String,
    material: Vec<u8>,
}

impl SecretKey {
    /// Creates a key for the named algorithm from raw bytes
    pub fn new(algorithm: impl Into<String>, material: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm: algorithm.into(),
            material: material.into(),
        }
    }

    /// Creates an `"AES"` key; 16, 24 and 32-byte keys select AES-128/192/256
    pub fn aes(material: impl Into<Vec<u8>>) -> Self {
        Self::new(AES_ALGORITHM, material)
    }

    /// Loads a key kept as Base64 text
    pub fn from_base64(algorithm: impl Into<String>, encoded: &str) -> Result<Self> {
        let material = encoding::decode(encoded).map_err(Error::InvalidKeyEncoding)?;
        Ok(Self::new(algorithm, material))
    }

    /// Encodes the key material as Base64 text
    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(encoding::encode(&self.material))
    }

    /// Returns the algorithm name the key belongs to
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Returns the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.material
    }

    /// Returns the key length in bytes
    pub fn len(&self) -> usize {
        self.material.len()
    }

    /// Returns true if the key has no material
    pub fn is_empty(&self) -> bool {
        self.material.is_empty()
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_algorithm = Choice::from(u8::from(
            self.algorithm.eq_ignore_ascii_case(&other.algorithm),
        ));
        // slices of different lengths compare unequal without a timing leak on content
        same_algorithm & self.material.as_slice().ct_eq(other.material.as_slice())
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SecretKey({}, {} bytes, [REDACTED])",
            self.algorithm,
            self.material.len()
        )
    }
}
