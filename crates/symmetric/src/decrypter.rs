//! Base64 decrypter

use zeroize::Zeroize;

use crate::cipher::CipherTransform;
use crate::encoding;
use crate::error::{CipherError, Error, Result};
use crate::key::SecretKey;

const COMPONENT: &str = "Decrypter";

/// Decrypts Base64 ciphertext back into text or bytes
///
/// The mirror of [`Encrypter`](crate::Encrypter): single-argument forms use
/// the default key, the `_with_key` forms take a key and use its algorithm
/// name as the transformation, and the `_with` forms take both explicitly.
/// Every failure after the key is known is reported as
/// [`Error::DecryptionFailed`], whatever the cause.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decrypter {
    key: Option<SecretKey>,
}

impl Decrypter {
    /// Creates a decrypter without a default key
    pub fn new() -> Self {
        Self { key: None }
    }

    /// Creates a decrypter with a default key
    pub fn with_key(key: SecretKey) -> Self {
        Self { key: Some(key) }
    }

    /// Returns the default key, if any
    pub fn key(&self) -> Option<&SecretKey> {
        self.key.as_ref()
    }

    fn default_key(&self) -> Result<&SecretKey> {
        self.key.as_ref().ok_or(Error::NoKey {
            component: COMPONENT,
        })
    }

    /// Decrypts `data` with the default key into a UTF-8 string
    pub fn decrypt(&self, data: &str) -> Result<String> {
        let key = self.default_key()?;
        self.decrypt_with_key(data, key)
    }

    /// Decrypts `data` with the default key into bytes
    pub fn decrypt_as_bytes(&self, data: &str) -> Result<Vec<u8>> {
        let key = self.default_key()?;
        self.decrypt_as_bytes_with_key(data, key)
    }

    /// Decrypts `data` with `key` into a UTF-8 string
    pub fn decrypt_with_key(&self, data: &str, key: &SecretKey) -> Result<String> {
        self.decrypt_with(data, key, key.algorithm())
    }

    /// Decrypts `data` with `key` into bytes
    pub fn decrypt_as_bytes_with_key(&self, data: &str, key: &SecretKey) -> Result<Vec<u8>> {
        self.decrypt_as_bytes_with(data, key, key.algorithm())
    }

    /// Decrypts `data` with `key` under an explicit transformation into a
    /// UTF-8 string
    ///
    /// Decrypted bytes that are not valid UTF-8 are wiped and reported as a
    /// failed decryption.
    pub fn decrypt_with(&self, data: &str, key: &SecretKey, transformation: &str) -> Result<String> {
        let plaintext = self.decrypt_as_bytes_with(data, key, transformation)?;
        String::from_utf8(plaintext).map_err(|err| {
            err.into_bytes().zeroize();
            failed(transformation, CipherError::InvalidUtf8)
        })
    }

    /// Decrypts `data` with `key` under an explicit transformation into bytes
    pub fn decrypt_as_bytes_with(
        &self,
        data: &str,
        key: &SecretKey,
        transformation: &str,
    ) -> Result<Vec<u8>> {
        let plaintext = CipherTransform::resolve(transformation)
            .and_then(|transform| {
                let ciphertext = encoding::decode(data)?;
                transform.decrypt(key, &ciphertext)
            })
            .map_err(|source| failed(transformation, source))?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            transformation,
            encoded_len = data.len(),
            plaintext_len = plaintext.len(),
            "data decrypted"
        );

        Ok(plaintext)
    }
}

fn failed(transformation: &str, source: CipherError) -> Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(transformation, error = %source, "decryption failed");
    #[cfg(not(feature = "tracing"))]
    let _ = transformation;

    Error::DecryptionFailed { source }
}
