//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode XORs each plaintext block with the previous ciphertext block
//! before encryption. The first block is XORed with an initialization
//! vector (IV), which must be exactly one block long and should be
//! unpredictable for every message.
//!
//! This implementation follows NIST SP 800-38A.

use alloc::vec::Vec;

use super::BlockCipherMode;
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// CBC mode implementation
#[derive(Clone, Debug)]
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), B::block_size())?;

        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    /// Returns the IV this instance chains from
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }
}

impl<B: BlockCipher> BlockCipherMode for Cbc<B> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("CBC plaintext", plaintext.len(), block_size)?;

        let mut ciphertext = plaintext.to_vec();
        let mut prev = self.iv.clone();
        for block in ciphertext.chunks_exact_mut(block_size) {
            for (b, p) in block.iter_mut().zip(&prev) {
                *b ^= p;
            }
            self.cipher.encrypt_block(block)?;
            prev.copy_from_slice(block);
        }
        Ok(ciphertext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        validate::block_aligned("CBC ciphertext", ciphertext.len(), block_size)?;

        let mut plaintext = ciphertext.to_vec();
        let previous_blocks =
            core::iter::once(self.iv.as_slice()).chain(ciphertext.chunks_exact(block_size));
        for (block, prev) in plaintext.chunks_exact_mut(block_size).zip(previous_blocks) {
            self.cipher.decrypt_block(block)?;
            for (b, p) in block.iter_mut().zip(prev) {
                *b ^= p;
            }
        }
        Ok(plaintext)
    }

    fn mode_name() -> &'static str {
        "CBC"
    }
}
