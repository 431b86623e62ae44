//! Block cipher modes of operation
//!
//! Both modes here work on block-aligned input only; padding is applied by
//! the caller (see [`crate::padding`]).

pub mod cbc;
pub mod ecb;

pub use cbc::Cbc;
pub use ecb::Ecb;

use alloc::vec::Vec;

use crate::error::Result;

/// A block cipher mode that transforms whole messages
pub trait BlockCipherMode {
    /// Encrypts block-aligned plaintext
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts block-aligned ciphertext
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>>;

    /// Returns the mode name
    fn mode_name() -> &'static str
    where
        Self: Sized;
}
