//! # tokencrypt
//!
//! Encrypts strings and bytes into Base64 text with AES, and back, under a
//! caller-supplied key.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tokencrypt = "0.3"
//! ```
//!
//! ```
//! # #[cfg(feature = "symmetric")]
//! # {
//! use tokencrypt::prelude::*;
//!
//! let key = SecretKey::aes([7u8; 32]);
//! let ciphertext = Encrypter::new().encrypt_with("hello world", &key, "AES/CBC/PKCS5Padding")?;
//! let plaintext = Decrypter::new().decrypt_with(&ciphertext, &key, "AES/CBC/PKCS5Padding")?;
//! assert_eq!(plaintext, "hello world");
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support in the primitives
//! - `symmetric` (default): the Base64 encrypter and decrypter
//! - `tracing` (default): debug and trace events from the encrypter and decrypter
//! - `serde`: `KeyConfig` and string (de)serialization of transformations
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`tokencrypt-params`]: key, block and round sizes; transformation names
//! - [`tokencrypt-algorithms`]: AES, ECB and CBC modes, padding
//! - [`tokencrypt-symmetric`]: keys, transformations, `Encrypter`, `Decrypter`

#![cfg_attr(not(feature = "std"), no_std)]

pub use tokencrypt_algorithms as algorithms;
pub use tokencrypt_params as params;

#[cfg(feature = "symmetric")]
pub use tokencrypt_symmetric as symmetric;

/// Common imports for tokencrypt users
pub mod prelude {
    pub use crate::algorithms::{BlockCipher, BlockCipherMode, Padding};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{
        CipherError, CipherTransform, Decrypter, Encrypter, Error, Result, SecretKey,
        Transformation,
    };

    #[cfg(feature = "serde")]
    pub use crate::symmetric::KeyConfig;

    pub use zeroize::{Zeroize, Zeroizing};
}
