//! Base64 encrypter

use crate::cipher::CipherTransform;
use crate::encoding;
use crate::error::{CipherError, Error, Result};
use crate::key::SecretKey;

const COMPONENT: &str = "Encrypter";

/// Encrypts data and returns the ciphertext as Base64 text
///
/// An encrypter may hold a default key. The single-argument
/// [`encrypt`](Self::encrypt) uses it; the other forms take the key (and
/// optionally the transformation) per call and work whether or not a default
/// key is set.
///
/// ```
/// use tokencrypt_symmetric::{Encrypter, SecretKey};
///
/// let key = SecretKey::aes([0x42u8; 16]);
/// let ciphertext = Encrypter::with_key(key.clone()).encrypt("hello world")?;
/// assert_eq!(ciphertext, Encrypter::new().encrypt_with(b"hello world", &key, "AES")?);
/// # Ok::<(), tokencrypt_symmetric::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Encrypter {
    key: Option<SecretKey>,
}

impl Encrypter {
    /// Creates an encrypter without a default key
    pub fn new() -> Self {
        Self { key: None }
    }

    /// Creates an encrypter with a default key
    pub fn with_key(key: SecretKey) -> Self {
        Self { key: Some(key) }
    }

    /// Returns the default key, if any
    pub fn key(&self) -> Option<&SecretKey> {
        self.key.as_ref()
    }

    /// Encrypts `data` with the default key and the key's own algorithm
    ///
    /// Fails with [`Error::NoKey`] if the encrypter has no default key.
    pub fn encrypt(&self, data: impl AsRef<[u8]>) -> Result<String> {
        let key = self.key.as_ref().ok_or(Error::NoKey {
            component: COMPONENT,
        })?;
        self.encrypt_with_key(data, key)
    }

    /// Encrypts `data` with `key`, using the key's algorithm name as the
    /// transformation
    pub fn encrypt_with_key(&self, data: impl AsRef<[u8]>, key: &SecretKey) -> Result<String> {
        self.encrypt_with(data, key, key.algorithm())
    }

    /// Encrypts `data` with `key` under an explicit transformation such as
    /// `"AES/CBC/PKCS5Padding"`
    pub fn encrypt_with(
        &self,
        data: impl AsRef<[u8]>,
        key: &SecretKey,
        transformation: &str,
    ) -> Result<String> {
        let data = data.as_ref();
        let ciphertext = CipherTransform::resolve(transformation)
            .and_then(|transform| transform.encrypt(key, data))
            .map_err(|source| failed(transformation, source))?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            transformation,
            plaintext_len = data.len(),
            ciphertext_len = ciphertext.len(),
            "data encrypted"
        );

        Ok(encoding::encode(&ciphertext))
    }
}

fn failed(transformation: &str, source: CipherError) -> Error {
    #[cfg(feature = "tracing")]
    tracing::debug!(transformation, error = %source, "encryption failed");
    #[cfg(not(feature = "tracing"))]
    let _ = transformation;

    Error::EncryptionFailed { source }
}
