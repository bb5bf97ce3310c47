//! Benchmarks for card generation.
//!
//! # Benchmarks
//!
//! - **`generate_permutation25`**: Shuffles 1..=25 onto a card.
//! - **`generate_classic75`**: Draws five values per column from 15-value bands.
//! - **`deal`**: Derives both seats' seeds from a match seed and fills both cards.
//!
//! # Test Data
//!
//! Uses three fixed seeds to keep runs reproducible:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use bingoduel_generator::{CardGenerator, CardLayout, CardSeed};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate(c: &mut Criterion) {
    for layout in CardLayout::ALL {
        let generator = CardGenerator::new(layout);
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = CardSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{layout}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_deal(c: &mut Criterion) {
    let generator = CardGenerator::default();
    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = CardSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("deal", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.deal(seed, 1),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_generate, bench_deal);
criterion_main!(benches);
