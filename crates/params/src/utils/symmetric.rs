//! Constants for symmetric encryption algorithms

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of rounds for AES-128
pub const AES128_ROUNDS: usize = 10;

/// Number of rounds for AES-192
pub const AES192_ROUNDS: usize = 12;

/// Number of rounds for AES-256
pub const AES256_ROUNDS: usize = 14;

/// Key algorithm name carried by AES keys
pub const AES_ALGORITHM: &str = "AES";

/// Electronic codebook mode name
pub const MODE_ECB: &str = "ECB";

/// Cipher block chaining mode name
pub const MODE_CBC: &str = "CBC";

/// PKCS#5 padding name (PKCS#7 over a 16-byte block)
pub const PADDING_PKCS5: &str = "PKCS5Padding";

/// No padding; input must be block aligned
pub const PADDING_NONE: &str = "NoPadding";

/// Separator between the cipher, mode and padding of a transformation
pub const TRANSFORMATION_SEPARATOR: char = '/';
