//! Shared fixtures for the tokencrypt property tests, scenarios and benches
pub mod vectors;

use tokencrypt_symmetric::SecretKey;

/// Every transformation identifier the encrypter accepts, in canonical form
pub const TRANSFORMATIONS: [&str; 5] = [
    "AES",
    "AES/ECB/PKCS5Padding",
    "AES/ECB/NoPadding",
    "AES/CBC/PKCS5Padding",
    "AES/CBC/NoPadding",
];

/// Identifiers that pad, so any plaintext length is accepted
pub const PADDED_TRANSFORMATIONS: [&str; 3] = ["AES", "AES/ECB/PKCS5Padding", "AES/CBC/PKCS5Padding"];

/// Builds an AES key from hex, panicking on malformed fixtures
pub fn aes_key(hex_key: &str) -> SecretKey {
    match hex::decode(hex_key) {
        Ok(material) => SecretKey::aes(material),
        Err(err) => panic!("bad key fixture {hex_key}: {err}"),
    }
}
