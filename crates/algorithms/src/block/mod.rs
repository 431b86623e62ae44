//! Block cipher implementations
//!
//! A block cipher transforms one fixed-size block at a time. Modes of
//! operation in [`modes`] chain those single-block transforms over messages
//! of any block-aligned length.

pub mod aes;
pub mod modes;

use crate::error::Result;

/// Compile-time properties of a cipher algorithm
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// A keyed block cipher
pub trait BlockCipher: CipherAlgorithm + Sized {
    /// Creates a new block cipher instance, expanding the given key
    ///
    /// Fails if the key is not exactly [`CipherAlgorithm::KEY_SIZE`] bytes.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }
}
