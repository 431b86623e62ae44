//! Error handling for the encrypter and decrypter
//!
//! Callers see three outcomes: a missing default key, a failed encryption,
//! or a failed decryption. The precise reason a transform failed is kept as
//! the error's [`source`](std::error::Error::source) for diagnostics but is
//! never a separate variant, so callers cannot branch on why decryption
//! failed.

use thiserror::Error;

use crate::transform::Transformation;

/// Error type for encrypter and decrypter operations
#[derive(Debug, Error)]
pub enum Error {
    /// A default-key operation was called on an instance built without a key
    #[error("There is no Key defined for this {component}")]
    NoKey {
        /// `"Encrypter"` or `"Decrypter"`
        component: &'static str,
    },

    /// Encryption failed; the cause is available as the error source
    #[error("Failed encrypting data")]
    EncryptionFailed {
        /// Underlying failure
        #[source]
        source: CipherError,
    },

    /// Decryption failed; the cause is available as the error source
    #[error("Failed decrypting data")]
    DecryptionFailed {
        /// Underlying failure
        #[source]
        source: CipherError,
    },

    /// Key text could not be decoded from Base64
    #[error("invalid key encoding")]
    InvalidKeyEncoding(#[source] base64::DecodeError),
}

impl Error {
    /// Returns true for the missing-key configuration error
    pub fn is_no_key(&self) -> bool {
        matches!(self, Error::NoKey { .. })
    }

    /// Returns the low-level cause of a failed encryption or decryption
    pub fn cipher_error(&self) -> Option<&CipherError> {
        match self {
            Error::EncryptionFailed { source } | Error::DecryptionFailed { source } => Some(source),
            _ => None,
        }
    }
}

/// The underlying reason a transform failed
#[derive(Debug, Error)]
pub enum CipherError {
    /// The identifier is not in the supported transformation table
    #[error("unsupported transformation: {0}")]
    UnsupportedTransformation(String),

    /// The key belongs to a different algorithm than the transformation
    #[error("key algorithm {key} does not match transformation {transformation}")]
    KeyAlgorithmMismatch {
        /// Algorithm name carried by the key
        key: String,
        /// Transformation the key was used with
        transformation: Transformation,
    },

    /// The key length selects no variant of the cipher
    #[error("invalid key length for {algorithm}: {length} bytes")]
    InvalidKeyLength {
        /// Cipher name
        algorithm: &'static str,
        /// Key length in bytes
        length: usize,
    },

    /// Block cipher, mode or padding failure
    #[error(transparent)]
    Primitive(#[from] tokencrypt_algorithms::Error),

    /// Ciphertext is not valid Base64
    #[error("malformed base64 ciphertext: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decrypted bytes are not valid UTF-8
    #[error("decrypted data is not valid UTF-8")]
    InvalidUtf8,
}

/// Result type for encrypter and decrypter operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for the core transform
pub type CipherResult<T> = core::result::Result<T, CipherError>;
