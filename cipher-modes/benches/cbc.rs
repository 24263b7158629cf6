use cipher_modes::{Aes, CipherModes, Des};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Benchmark CBC encryption of a 4 KiB buffer
fn bench_cbc_encrypt(c: &mut Criterion) {
    let data = vec![0x42u8; 4096];
    let aes = Aes::new(b"bench-key-16-byt").expect("valid AES key");
    let des = Des::new(b"benchkey").expect("valid DES key");

    c.bench_function("cbc_aes128_encrypt_4k", |b| {
        b.iter(|| CipherModes::cbc_encrypt(&aes, black_box(&data), b"initialization16"))
    });

    c.bench_function("cbc_des_encrypt_4k", |b| {
        b.iter(|| CipherModes::cbc_encrypt(&des, black_box(&data), b"initialv"))
    });
}

criterion_group!(benches, bench_cbc_encrypt);
criterion_main!(benches);
