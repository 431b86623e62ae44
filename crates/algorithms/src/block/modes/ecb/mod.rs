//! Electronic Codebook (ECB) mode implementation
//!
//! Every block is encrypted independently under the same key, so equal
//! plaintext blocks give equal ciphertext blocks. ECB needs no IV.

use alloc::vec::Vec;

use super::BlockCipherMode;
use crate::block::BlockCipher;
use crate::error::{validate, Result};

/// ECB mode implementation
#[derive(Clone, Debug)]
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    /// Creates a new ECB mode instance around the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }
}

impl<B: BlockCipher> BlockCipherMode for Ecb<B> {
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB plaintext", plaintext.len(), B::block_size())?;

        let mut ciphertext = plaintext.to_vec();
        for block in ciphertext.chunks_exact_mut(B::block_size()) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(ciphertext)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_aligned("ECB ciphertext", ciphertext.len(), B::block_size())?;

        let mut plaintext = ciphertext.to_vec();
        for block in plaintext.chunks_exact_mut(B::block_size()) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(plaintext)
    }

    fn mode_name() -> &'static str {
        "ECB"
    }
}
