//! Block padding schemes
//!
//! [`Pkcs7`] is the scheme Java providers call `PKCS5Padding` when used with
//! a 16-byte block. [`NoPadding`] passes data through and leaves the block
//! alignment check to the mode.

use alloc::vec::Vec;

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// A padding scheme applied before encryption and removed after decryption
pub trait Padding {
    /// Scheme name
    fn name() -> &'static str;

    /// Returns `data` extended to a whole number of blocks
    fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>>;

    /// Strips the padding from decrypted, block-aligned data
    fn unpad(data: Vec<u8>, block_size: usize) -> Result<Vec<u8>>;
}

/// PKCS#7 padding: `n` bytes of value `n`, always at least one byte
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pkcs7;

/// No padding; input must already be block aligned
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoPadding;

fn check_block_size(block_size: usize) -> Result<()> {
    validate::parameter(
        (1..=255).contains(&block_size),
        "block size",
        "must be between 1 and 255 bytes",
    )
}

impl Padding for Pkcs7 {
    fn name() -> &'static str {
        "PKCS#7"
    }

    fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size(block_size)?;

        let pad_len = block_size - data.len() % block_size;
        let mut padded = Vec::with_capacity(data.len() + pad_len);
        padded.extend_from_slice(data);
        // block_size <= 255 so the pad length fits in a byte
        padded.resize(data.len() + pad_len, pad_len as u8);
        Ok(padded)
    }

    fn unpad(mut data: Vec<u8>, block_size: usize) -> Result<Vec<u8>> {
        check_block_size(block_size)?;
        validate::block_aligned("PKCS#7 padded data", data.len(), block_size)?;
        validate::min_length("PKCS#7 padded data", data.len(), block_size)?;

        let last_block = &data[data.len() - block_size..];
        let pad = last_block[block_size - 1];

        let mut valid: Choice = pad.ct_gt(&0) & !pad.ct_gt(&(block_size as u8));
        for (i, byte) in last_block.iter().rev().enumerate() {
            let inside = (i as u8).ct_lt(&pad);
            valid &= !inside | byte.ct_eq(&pad);
        }

        if !bool::from(valid) {
            data.zeroize();
            return Err(Error::Padding { scheme: Self::name() });
        }
        let unpadded_len = data.len() - usize::from(pad);
        data.truncate(unpadded_len);
        Ok(data)
    }
}

impl Padding for NoPadding {
    fn name() -> &'static str {
        "none"
    }

    fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        validate::block_aligned("unpadded plaintext", data.len(), block_size)?;
        Ok(data.to_vec())
    }

    fn unpad(data: Vec<u8>, block_size: usize) -> Result<Vec<u8>> {
        validate::block_aligned("unpadded plaintext", data.len(), block_size)?;
        Ok(data)
    }
}
