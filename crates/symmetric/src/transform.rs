//! Transformation identifiers
//!
//! A transformation names a cipher, a mode of operation and a padding scheme,
//! written `"AES/CBC/PKCS5Padding"`. The bare algorithm name `"AES"` is also
//! accepted and stands for ECB with PKCS#5 padding. Only the identifiers in
//! [`Transformation::SUPPORTED`] resolve; matching ignores ASCII case.

use core::fmt;
use core::str::FromStr;

use tokencrypt_params::utils::symmetric::{
    AES_ALGORITHM, MODE_CBC, MODE_ECB, PADDING_NONE, PADDING_PKCS5, TRANSFORMATION_SEPARATOR,
};

use crate::error::CipherError;

/// Block cipher named by a transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherName {
    /// AES with a 128, 192 or 256-bit key
    Aes,
}

impl CipherName {
    /// Returns the algorithm name keys for this cipher carry
    pub fn as_str(&self) -> &'static str {
        match self {
            CipherName::Aes => AES_ALGORITHM,
        }
    }
}

/// Mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Electronic codebook
    Ecb,
    /// Cipher block chaining with a random IV prepended to the output
    Cbc,
}

impl Mode {
    /// Returns the mode name as written in a transformation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Ecb => MODE_ECB,
            Mode::Cbc => MODE_CBC,
        }
    }

    /// Returns true if the mode needs an IV
    pub fn uses_iv(&self) -> bool {
        matches!(self, Mode::Cbc)
    }
}

/// Padding scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingScheme {
    /// PKCS#5 padding, applied as PKCS#7 over the cipher block size
    Pkcs5,
    /// No padding; the input must be a whole number of blocks
    None,
}

impl PaddingScheme {
    /// Returns the padding name as written in a transformation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddingScheme::Pkcs5 => PADDING_PKCS5,
            PaddingScheme::None => PADDING_NONE,
        }
    }
}

/// A resolved cipher/mode/padding triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transformation {
    cipher: CipherName,
    mode: Mode,
    padding: PaddingScheme,
}

impl Transformation {
    /// `AES/ECB/PKCS5Padding`
    pub const AES_ECB_PKCS5: Self = Self::new(CipherName::Aes, Mode::Ecb, PaddingScheme::Pkcs5);
    /// `AES/ECB/NoPadding`
    pub const AES_ECB_NONE: Self = Self::new(CipherName::Aes, Mode::Ecb, PaddingScheme::None);
    /// `AES/CBC/PKCS5Padding`
    pub const AES_CBC_PKCS5: Self = Self::new(CipherName::Aes, Mode::Cbc, PaddingScheme::Pkcs5);
    /// `AES/CBC/NoPadding`
    pub const AES_CBC_NONE: Self = Self::new(CipherName::Aes, Mode::Cbc, PaddingScheme::None);

    /// Every supported transformation
    pub const SUPPORTED: [Self; 4] = [
        Self::AES_ECB_PKCS5,
        Self::AES_ECB_NONE,
        Self::AES_CBC_PKCS5,
        Self::AES_CBC_NONE,
    ];

    const fn new(cipher: CipherName, mode: Mode, padding: PaddingScheme) -> Self {
        Self {
            cipher,
            mode,
            padding,
        }
    }

    /// Resolves an identifier against the supported table
    pub fn resolve(identifier: &str) -> Result<Self, CipherError> {
        let identifier = identifier.trim();

        // bare algorithm name
        if identifier.eq_ignore_ascii_case(AES_ALGORITHM) {
            return Ok(Self::AES_ECB_PKCS5);
        }

        let mut parts = identifier.split(TRANSFORMATION_SEPARATOR);
        let (Some(cipher), Some(mode), Some(padding), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(CipherError::UnsupportedTransformation(identifier.to_string()));
        };

        Self::SUPPORTED
            .into_iter()
            .find(|t| {
                t.cipher.as_str().eq_ignore_ascii_case(cipher)
                    && t.mode.as_str().eq_ignore_ascii_case(mode)
                    && t.padding.as_str().eq_ignore_ascii_case(padding)
            })
            .ok_or_else(|| CipherError::UnsupportedTransformation(identifier.to_string()))
    }

    /// Returns the cipher
    pub fn cipher(&self) -> CipherName {
        self.cipher
    }

    /// Returns the mode of operation
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the padding scheme
    pub fn padding(&self) -> PaddingScheme {
        self.padding
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::AES_ECB_PKCS5
    }
}

impl FromStr for Transformation {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.cipher.as_str(),
            self.mode.as_str(),
            self.padding.as_str(),
            sep = TRANSFORMATION_SEPARATOR
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Transformation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Transformation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        Self::resolve(&identifier).map_err(serde::de::Error::custom)
    }
}
