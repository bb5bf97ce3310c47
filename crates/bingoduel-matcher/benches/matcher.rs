//! Benchmarks for line matching.
//!
//! # Benchmarks
//!
//! - **`check_completed_lines`**: Counts completed lines for mark sets of
//!   increasing size, from nothing marked to the full card.
//! - **`generate_lookup_table`**: Builds the cross-card table for a card
//!   against itself, its mirror, and a disjoint card.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench matcher
//! ```

use std::hint;

use bingoduel_core::{Card, CellValue, MarkedCells};
use bingoduel_matcher::{check_completed_lines, generate_lines, generate_lookup_table};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn card_from(values: impl IntoIterator<Item = u32>) -> Card {
    let values: Vec<u32> = values.into_iter().collect();
    let rows: Vec<&[u32]> = values.chunks(5).collect();
    Card::from_rows(&rows).unwrap()
}

fn marks(values: impl IntoIterator<Item = u32>) -> MarkedCells {
    values
        .into_iter()
        .map(|n| CellValue::new(n).unwrap())
        .collect()
}

fn bench_check_completed_lines(c: &mut Criterion) {
    let card = card_from(1..=25);
    let cases = [
        ("empty", MarkedCells::new()),
        ("one_row", marks(1..=5)),
        ("checkerboard", marks((1..=25).step_by(2))),
        ("full", marks(1..=25)),
    ];

    for (param, marked) in cases {
        c.bench_with_input(
            BenchmarkId::new("check_completed_lines", param),
            &marked,
            |b, marked| {
                b.iter(|| check_completed_lines(hint::black_box(&card), hint::black_box(marked)));
            },
        );
    }
}

fn bench_generate_lines(c: &mut Criterion) {
    let card = card_from(1..=25);
    c.bench_function("generate_lines", |b| {
        b.iter(|| generate_lines(hint::black_box(&card)));
    });
}

fn bench_generate_lookup_table(c: &mut Criterion) {
    let card = card_from(1..=25);
    let cases = [
        ("same", card.clone()),
        ("mirrored", card_from((1..=25).rev())),
        ("disjoint", card_from(101..=125)),
    ];

    for (param, other) in cases {
        c.bench_with_input(
            BenchmarkId::new("generate_lookup_table", param),
            &other,
            |b, other| {
                b.iter(|| {
                    let table = generate_lookup_table(hint::black_box(&card), other).unwrap();
                    hint::black_box(table)
                });
            },
        );
    }
}

criterion_group!(
    benches,
    bench_check_completed_lines,
    bench_generate_lines,
    bench_generate_lookup_table,
);
criterion_main!(benches);
