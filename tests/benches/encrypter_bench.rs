use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokencrypt_algorithms::block::aes::{Aes128, Aes256};
use tokencrypt_algorithms::block::modes::cbc::Cbc;
use tokencrypt_algorithms::{BlockCipher, BlockCipherMode};
use tokencrypt_symmetric::{Decrypter, Encrypter, SecretKey};
use tokencrypt_tests::PADDED_TRANSFORMATIONS;

fn bench_aes_cbc(c: &mut Criterion) {
    let mut group = c.benchmark_group("AES-CBC");
    let iv = [0u8; 16];

    for size in [16, 256, 1024, 16384].iter() {
        let data = vec![0u8; *size];
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("AES-128", size), size, |b, _| {
            let cbc = Cbc::new(Aes128::new(&[0u8; 16]).unwrap(), &iv).unwrap();
            b.iter(|| {
                let _ = cbc.encrypt(&data);
            });
        });

        group.bench_with_input(BenchmarkId::new("AES-256", size), size, |b, _| {
            let cbc = Cbc::new(Aes256::new(&[0u8; 32]).unwrap(), &iv).unwrap();
            b.iter(|| {
                let _ = cbc.encrypt(&data);
            });
        });
    }

    group.finish();
}

fn bench_encrypter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encrypter");
    let key = SecretKey::aes([0x42u8; 16]);
    let encrypter = Encrypter::with_key(key.clone());
    let message = "x".repeat(1024);

    for transformation in PADDED_TRANSFORMATIONS {
        group.bench_with_input(
            BenchmarkId::new("encrypt", transformation),
            &transformation,
            |b, &transformation| {
                b.iter(|| {
                    let _ = encrypter.encrypt_with(&message, &key, transformation);
                });
            },
        );
    }

    group.finish();
}

fn bench_decrypter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decrypter");
    let key = SecretKey::aes([0x42u8; 16]);
    let decrypter = Decrypter::with_key(key.clone());
    let message = "x".repeat(1024);

    for transformation in PADDED_TRANSFORMATIONS {
        let ciphertext = Encrypter::new()
            .encrypt_with(&message, &key, transformation)
            .unwrap();
        group.bench_with_input(
            BenchmarkId::new("decrypt", transformation),
            &ciphertext,
            |b, ciphertext| {
                b.iter(|| {
                    let _ = decrypter.decrypt_with(ciphertext, &key, transformation);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_aes_cbc, bench_encrypter, bench_decrypter);
criterion_main!(benches);
