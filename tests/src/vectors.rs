//! Known-answer vectors from NIST SP 800-38A, appendix F

/// AES-128 key used throughout F.1.1 and F.2.1
pub const AES128_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";

/// AES-192 key used throughout F.1.3 and F.2.3
pub const AES192_KEY: &str = "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b";

/// AES-256 key used throughout F.1.5 and F.2.5
pub const AES256_KEY: &str =
    "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

/// CBC initialization vector for F.2
pub const CBC_IV: &str = "000102030405060708090a0b0c0d0e0f";

/// The four-block plaintext shared by every F vector
pub const PLAINTEXT: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);

/// A known-answer case: key, optional IV, expected ciphertext
pub struct Vector {
    /// Transformation identifier
    pub transformation: &'static str,
    /// Hex key
    pub key: &'static str,
    /// Hex IV for CBC
    pub iv: Option<&'static str>,
    /// Hex ciphertext of [`PLAINTEXT`]
    pub ciphertext: &'static str,
}

/// ECB and CBC vectors for every key size
pub const VECTORS: [Vector; 6] = [
    Vector {
        transformation: "AES/ECB/NoPadding",
        key: AES128_KEY,
        iv: None,
        ciphertext: concat!(
            "3ad77bb40d7a3660a89ecaf32466ef97",
            "f5d3d58503b9699de785895a96fdbaaf",
            "43b1cd7f598ece23881b00e3ed030688",
            "7b0c785e27e8ad3f8223207104725dd4",
        ),
    },
    Vector {
        transformation: "AES/ECB/NoPadding",
        key: AES192_KEY,
        iv: None,
        ciphertext: concat!(
            "bd334f1d6e45f25ff712a214571fa5cc",
            "974104846d0ad3ad7734ecb3ecee4eef",
            "ef7afd2270e2e60adce0ba2face6444e",
            "9a4b41ba738d6c72fb16691603c18e0e",
        ),
    },
    Vector {
        transformation: "AES/ECB/NoPadding",
        key: AES256_KEY,
        iv: None,
        ciphertext: concat!(
            "f3eed1bdb5d2a03c064b5a7e3db181f8",
            "591ccb10d410ed26dc5ba74a31362870",
            "b6ed21b99ca6f4f9f153e7b1beafed1d",
            "23304b7a39f9f3ff067d8d8f9e24ecc7",
        ),
    },
    Vector {
        transformation: "AES/CBC/NoPadding",
        key: AES128_KEY,
        iv: Some(CBC_IV),
        ciphertext: concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7",
        ),
    },
    Vector {
        transformation: "AES/CBC/NoPadding",
        key: AES192_KEY,
        iv: Some(CBC_IV),
        ciphertext: concat!(
            "4f021db243bc633d7178183a9fa071e8",
            "b4d9ada9ad7dedf4e5e738763f69145a",
            "571b242012fb7ae07fa9baac3df102e0",
            "08b0e27988598881d920a9e64f5615cd",
        ),
    },
    Vector {
        transformation: "AES/CBC/NoPadding",
        key: AES256_KEY,
        iv: Some(CBC_IV),
        ciphertext: concat!(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
            "9cfc4e967edb808d679f777bc6702c7d",
            "39f23369a9d9bacfa530e26304231461",
            "b2eb05e2c39be9fcda6c19078c6a9d1b",
        ),
    },
];
