//! Benchmark: column-extension throughput and whole-tree searches.
//!
//! Run with:
//! `cargo bench`
//!
//! Mainly to sanity-check the per-character cost of the recurrence and the
//! branch-and-bound behavior on random texts.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use triealign::{DfsStrategy, DfsWalker, LocalAliBuilder, NullObserver, SubstringSource};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn bench_chain_extension(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_extension");

    for &qlen in &[32usize, 128, 512] {
        group.bench_function(format!("in_place_qlen_{qlen}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(7);
                    let query = random_dna(&mut rng, qlen);
                    let db = random_dna(&mut rng, 10_000);
                    (query, db)
                },
                |(query, db)| {
                    let ali = LocalAliBuilder::new(&query)
                        .with_scores(2, -1)
                        .with_gap_costs(-3, -1)
                        .with_threshold(u64::MAX)
                        .build()
                        .unwrap();
                    let mut state = ali.new_node_state();
                    ali.init_root(&mut state);
                    for (i, &ch) in db.iter().enumerate() {
                        ali.advance_in_place(i + 1, ch, &mut state);
                    }
                    criterion::black_box(state.max_value());
                },
                BatchSize::PerIteration,
            )
        });
    }

    group.finish();
}

fn bench_walker_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("walker_search");

    for &len in &[200usize, 500] {
        group.bench_function(format!("substring_source_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let text = random_dna(&mut rng, len);
                    let query = random_dna(&mut rng, 16);
                    (text, query)
                },
                |(text, query)| {
                    let ali = LocalAliBuilder::new(&query)
                        .with_scores(2, -1)
                        .with_gap_costs(-3, -1)
                        .with_threshold(12)
                        .build()
                        .unwrap();
                    let source = SubstringSource::new(&text);
                    let matches = DfsWalker::new(&ali).search(&source, &mut NullObserver);
                    criterion::black_box(matches.len());
                },
                BatchSize::PerIteration,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chain_extension, bench_walker_search);
criterion_main!(benches);
