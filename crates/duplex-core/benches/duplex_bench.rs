use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use duplex_core::{open, permute, seal, Key, Nonce, Rounds, State};

fn bench_permutation(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let words: [u64; 5] = std::array::from_fn(|_| rng.next_u64());

    let mut group = c.benchmark_group("permutation");
    group.bench_function("p6", |b| {
        let mut state = State::new(words);
        b.iter(|| permute(&mut state, Rounds::Six));
    });
    group.bench_function("p12", |b| {
        let mut state = State::new(words);
        b.iter(|| permute(&mut state, Rounds::Twelve));
    });
    group.finish();
}

fn bench_aead(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let key = Key::from([rng.next_u64(), rng.next_u64()]);
    let nonce = Nonce::from([rng.next_u64(), rng.next_u64()]);
    let ad: Vec<u64> = (0..4).map(|_| rng.next_u64()).collect();
    let message: Vec<u64> = (0..128).map(|_| rng.next_u64()).collect();
    let (ciphertext, tag) = seal(&key, &nonce, &ad, &message);

    let mut group = c.benchmark_group("aead");
    group.sample_size(50);
    group.bench_function("seal_1kib", |b| {
        b.iter(|| seal(&key, &nonce, &ad, &message));
    });
    group.bench_function("open_1kib", |b| {
        b.iter(|| open(&key, &nonce, &ad, &ciphertext, &tag));
    });
    group.finish();
}

criterion_group!(benches, bench_permutation, bench_aead);
criterion_main!(benches);
