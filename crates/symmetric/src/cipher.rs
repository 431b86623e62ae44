//! The core cipher transform
//!
//! [`CipherTransform`] is the one place bytes are encrypted and decrypted;
//! the encrypter and decrypter only add key defaulting and Base64 on top.
//! A fresh block cipher is keyed for every call, so a transform holds no
//! key material and can be shared freely.
//!
//! Output layout:
//!
//! - ECB: the cipher blocks
//! - CBC: a random IV block followed by the cipher blocks

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use tokencrypt_algorithms::{
    validate, Aes128, Aes192, Aes256, BlockCipher, BlockCipherMode, Cbc, Ecb, NoPadding,
    Padding, Pkcs7,
};
use tokencrypt_params::utils::symmetric::{AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE};

use crate::error::{CipherError, CipherResult};
use crate::key::SecretKey;
use crate::transform::{CipherName, Mode, PaddingScheme, Transformation};

/// Encrypts and decrypts raw bytes under one transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CipherTransform {
    transformation: Transformation,
}

impl CipherTransform {
    /// Creates a transform for a resolved transformation
    pub fn new(transformation: Transformation) -> Self {
        Self { transformation }
    }

    /// Creates a transform from an identifier such as `"AES/CBC/PKCS5Padding"`
    pub fn resolve(identifier: &str) -> CipherResult<Self> {
        Transformation::resolve(identifier).map(Self::new)
    }

    /// Returns the transformation
    pub fn transformation(&self) -> Transformation {
        self.transformation
    }

    /// Encrypts `plaintext`, drawing any IV from the operating system RNG
    pub fn encrypt(&self, key: &SecretKey, plaintext: &[u8]) -> CipherResult<Vec<u8>> {
        self.encrypt_with_rng(key, plaintext, &mut OsRng)
    }

    /// Encrypts `plaintext`, drawing any IV from `rng`
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        key: &SecretKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> CipherResult<Vec<u8>> {
        self.check_key_algorithm(key)?;

        match self.transformation.cipher() {
            CipherName::Aes => match key.len() {
                AES128_KEY_SIZE => self.seal::<Aes128, R>(key.as_bytes(), plaintext, rng),
                AES192_KEY_SIZE => self.seal::<Aes192, R>(key.as_bytes(), plaintext, rng),
                AES256_KEY_SIZE => self.seal::<Aes256, R>(key.as_bytes(), plaintext, rng),
                length => Err(CipherError::InvalidKeyLength {
                    algorithm: CipherName::Aes.as_str(),
                    length,
                }),
            },
        }
    }

    /// Decrypts `ciphertext` produced by [`encrypt`](Self::encrypt)
    pub fn decrypt(&self, key: &SecretKey, ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
        self.check_key_algorithm(key)?;

        match self.transformation.cipher() {
            CipherName::Aes => match key.len() {
                AES128_KEY_SIZE => self.open::<Aes128>(key.as_bytes(), ciphertext),
                AES192_KEY_SIZE => self.open::<Aes192>(key.as_bytes(), ciphertext),
                AES256_KEY_SIZE => self.open::<Aes256>(key.as_bytes(), ciphertext),
                length => Err(CipherError::InvalidKeyLength {
                    algorithm: CipherName::Aes.as_str(),
                    length,
                }),
            },
        }
    }

    fn check_key_algorithm(&self, key: &SecretKey) -> CipherResult<()> {
        let expected = self.transformation.cipher().as_str();
        if !key.algorithm().eq_ignore_ascii_case(expected) {
            return Err(CipherError::KeyAlgorithmMismatch {
                key: key.algorithm().to_string(),
                transformation: self.transformation,
            });
        }
        Ok(())
    }

    fn seal<B: BlockCipher, R: RngCore + CryptoRng>(
        &self,
        key: &[u8],
        plaintext: &[u8],
        rng: &mut R,
    ) -> CipherResult<Vec<u8>> {
        let cipher = B::new(key)?;
        let padded = Zeroizing::new(match self.transformation.padding() {
            PaddingScheme::Pkcs5 => Pkcs7::pad(plaintext, B::BLOCK_SIZE)?,
            PaddingScheme::None => NoPadding::pad(plaintext, B::BLOCK_SIZE)?,
        });

        match self.transformation.mode() {
            Mode::Ecb => Ok(Ecb::new(cipher).encrypt(&padded)?),
            Mode::Cbc => {
                let mut output = vec![0u8; B::BLOCK_SIZE];
                rng.fill_bytes(&mut output);
                let body = Cbc::new(cipher, &output)?.encrypt(&padded)?;
                output.extend_from_slice(&body);
                Ok(output)
            }
        }
    }

    fn open<B: BlockCipher>(&self, key: &[u8], ciphertext: &[u8]) -> CipherResult<Vec<u8>> {
        let cipher = B::new(key)?;
        let padded = match self.transformation.mode() {
            Mode::Ecb => Ecb::new(cipher).decrypt(ciphertext)?,
            Mode::Cbc => {
                validate::min_length("CBC ciphertext", ciphertext.len(), B::BLOCK_SIZE)?;
                let (iv, body) = ciphertext.split_at(B::BLOCK_SIZE);
                Cbc::new(cipher, iv)?.decrypt(body)?
            }
        };

        let plaintext = match self.transformation.padding() {
            PaddingScheme::Pkcs5 => Pkcs7::unpad(padded, B::BLOCK_SIZE)?,
            PaddingScheme::None => NoPadding::unpad(padded, B::BLOCK_SIZE)?,
        };
        Ok(plaintext)
    }
}

impl From<Transformation> for CipherTransform {
    fn from(transformation: Transformation) -> Self {
        Self::new(transformation)
    }
}
