//! Block cipher primitives for tokencrypt
//!
//! This crate provides the low-level building blocks the symmetric layer is
//! assembled from:
//!
//! - the AES block cipher (FIPS 197) with 128, 192 and 256-bit keys
//! - the ECB and CBC modes of operation (NIST SP 800-38A)
//! - PKCS#7 and "no padding" schemes
//!
//! ## Constant-Time Guarantees
//!
//! The AES S-box is computed arithmetically rather than through table
//! lookups, and PKCS#7 padding is verified without data-dependent branches.
//! Round keys are zeroized when a cipher instance is dropped.
//!
//! The crate is usable without the standard library (an allocator is
//! required for the mode and padding helpers).

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod block;
pub mod error;
pub mod padding;

pub use block::aes::{Aes128, Aes192, Aes256};
pub use block::modes::{BlockCipherMode, Cbc, Ecb};
pub use block::{BlockCipher, CipherAlgorithm};
pub use error::{validate, Error, Result};
pub use padding::{NoPadding, Padding, Pkcs7};
