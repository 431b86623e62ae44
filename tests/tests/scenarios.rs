//! End-to-end scenarios for the encrypter and decrypter

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tokencrypt_symmetric::{Decrypter, Encrypter, Error, SecretKey};
use tokencrypt_tests::vectors::{self, VECTORS};
use tokencrypt_tests::{aes_key, PADDED_TRANSFORMATIONS};

#[test]
fn hello_world_round_trips_with_128_bit_key() {
    let key = SecretKey::aes((0u8..16).collect::<Vec<u8>>());
    let encrypter = Encrypter::with_key(key.clone());
    let decrypter = Decrypter::with_key(key);

    let ciphertext = encrypter.encrypt("hello world").unwrap();
    assert_eq!(decrypter.decrypt(&ciphertext).unwrap(), "hello world");
}

#[test]
fn ecb_output_matches_other_aes_implementations() {
    let cases = [
        ((0u8..16).collect::<Vec<u8>>(), "hello world", "knb984TzhRj6bIMQ8ZFnjQ=="),
        (b"0123456789abcdef".to_vec(), "hello world", "gWm+1O9JqIdFWcWyANqt5w=="),
        (hex::decode(vectors::AES128_KEY).unwrap(), "", "olS+iOA33dnXn7ZBHD+d+A=="),
    ];
    for (material, plaintext, expected) in cases {
        let key = SecretKey::aes(material);
        assert_eq!(Encrypter::with_key(key.clone()).encrypt(plaintext).unwrap(), expected);
        assert_eq!(Decrypter::with_key(key).decrypt(expected).unwrap(), plaintext);
    }
}

#[test]
fn keyless_encrypt_is_a_configuration_error() {
    match Encrypter::new().encrypt("x") {
        Err(Error::NoKey { component }) => assert_eq!(component, "Encrypter"),
        other => panic!("expected a missing key error, got {other:?}"),
    }
}

#[test]
fn keyless_decrypter_rejects_before_decoding() {
    // invalid Base64 still reports the missing key first
    let decrypter = Decrypter::new();
    assert!(decrypter.decrypt("%%%").unwrap_err().is_no_key());
    assert!(decrypter.decrypt_as_bytes("%%%").unwrap_err().is_no_key());
}

#[test]
fn nist_vectors_through_the_public_api() {
    let plaintext = hex::decode(vectors::PLAINTEXT).unwrap();

    for vector in VECTORS.iter() {
        let key = aes_key(vector.key);
        let ciphertext = hex::decode(vector.ciphertext).unwrap();

        let wire = match vector.iv {
            // ECB output is reproducible through the encrypter
            None => {
                let encoded = Encrypter::new()
                    .encrypt_with(&plaintext, &key, vector.transformation)
                    .unwrap();
                assert_eq!(encoded, STANDARD.encode(&ciphertext));
                encoded
            }
            // CBC draws its own IV, so only decryption is checked
            Some(iv) => {
                let mut wire = hex::decode(iv).unwrap();
                wire.extend_from_slice(&ciphertext);
                STANDARD.encode(wire)
            }
        };

        let decrypted = Decrypter::new()
            .decrypt_as_bytes_with(&wire, &key, vector.transformation)
            .unwrap();
        assert_eq!(decrypted, plaintext, "{}", vector.transformation);
    }
}

#[test]
fn keys_loaded_from_base64_interoperate() {
    let key = SecretKey::from_base64("AES", "K34VFiiu0qar9xWICc9PPA==").unwrap();
    assert_eq!(key, aes_key(vectors::AES128_KEY));

    let encoded = key.to_base64();
    let reloaded = SecretKey::from_base64("AES", &encoded).unwrap();
    let ciphertext = Encrypter::with_key(key).encrypt("token").unwrap();
    assert_eq!(Decrypter::with_key(reloaded).decrypt(&ciphertext).unwrap(), "token");
}

#[test]
fn one_instance_serves_many_threads() {
    let key = aes_key(vectors::AES256_KEY);
    let encrypter = Encrypter::with_key(key.clone());
    let decrypter = Decrypter::with_key(key);

    std::thread::scope(|scope| {
        for worker in 0..4 {
            let (encrypter, decrypter) = (&encrypter, &decrypter);
            scope.spawn(move || {
                for i in 0..16 {
                    let message = format!("worker {worker} message {i}");
                    for transformation in PADDED_TRANSFORMATIONS {
                        let key = encrypter.key().unwrap();
                        let ciphertext =
                            encrypter.encrypt_with(&message, key, transformation).unwrap();
                        assert_eq!(
                            decrypter.decrypt_with(&ciphertext, key, transformation).unwrap(),
                            message
                        );
                    }
                }
            });
        }
    });
}
