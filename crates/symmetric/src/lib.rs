//! Base64 encrypter and decrypter for the tokencrypt library
//!
//! Two small utilities sit on top of the primitives in
//! `tokencrypt-algorithms`:
//!
//! - [`Encrypter`] turns a string or bytes into Base64 ciphertext
//! - [`Decrypter`] turns Base64 ciphertext back into a string or bytes
//!
//! Each holds an optional default key. The cipher is chosen by a
//! [`Transformation`] identifier such as `"AES/CBC/PKCS5Padding"`, or by the
//! key's bare algorithm name (`"AES"`, meaning ECB with PKCS#5 padding).
//!
//! ```
//! use tokencrypt_symmetric::{Decrypter, Encrypter, SecretKey};
//!
//! let key = SecretKey::aes(*b"0123456789abcdef");
//! let ciphertext = Encrypter::with_key(key.clone()).encrypt("hello world")?;
//! let plaintext = Decrypter::with_key(key).decrypt(&ciphertext)?;
//! assert_eq!(plaintext, "hello world");
//! # Ok::<(), tokencrypt_symmetric::Error>(())
//! ```
//!
//! Failures are coarse: apart from a missing default key,
//! callers see only [`Error::EncryptionFailed`] or
//! [`Error::DecryptionFailed`], with the underlying [`CipherError`] kept as
//! the error source.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
#[cfg(feature = "serde")]
pub mod config;
pub mod decrypter;
mod encoding;
pub mod encrypter;
pub mod error;
pub mod key;
pub mod transform;

pub use cipher::CipherTransform;
#[cfg(feature = "serde")]
pub use config::KeyConfig;
pub use decrypter::Decrypter;
pub use encrypter::Encrypter;
pub use error::{CipherError, CipherResult, Error, Result};
pub use key::SecretKey;
pub use transform::{CipherName, Mode, PaddingScheme, Transformation};
