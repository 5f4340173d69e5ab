//! Benchmarks for the analysis pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vigenere_analysis::{decrypt, encrypt, recover_key, scan, Key, ReferenceProfile};

const PROSE: &str = "itwasthebestoftimesitwastheworstoftimesitwastheageofwisdom\
    itwastheageoffoolishnessitwastheepochofbeliefitwastheepochofincredulity\
    itwastheseasonoflightitwastheseasonofdarknessitwasthespringofhope";

fn ciphertext(key: &Key) -> String {
    encrypt(&PROSE.repeat(4), key).unwrap()
}

fn bench_scan(c: &mut Criterion) {
    let text = ciphertext(&Key::parse("lemon").unwrap());

    c.bench_function("coincidence_scan", |b| b.iter(|| scan(black_box(&text))));
}

fn bench_recover_key(c: &mut Criterion) {
    let text = ciphertext(&Key::parse("lemon").unwrap());

    c.bench_function("recover_key", |b| {
        b.iter(|| recover_key(black_box(&text), 5, &ReferenceProfile::ENGLISH).unwrap())
    });
}

fn bench_decrypt(c: &mut Criterion) {
    let key = Key::parse("lemon").unwrap();
    let text = ciphertext(&key);

    c.bench_function("decrypt", |b| b.iter(|| decrypt(black_box(&text), &key).unwrap()));
}

criterion_group!(benches, bench_scan, bench_recover_key, bench_decrypt);
criterion_main!(benches);
