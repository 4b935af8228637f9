//! Criterion benchmarks for the wordsieve segmentation engine.
//!
//! Covers the two hot paths:
//! - Whole-text candidate extraction
//! - Contraction decomposition of single tokens

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wordsieve::spelling::{SpellcheckLanguage, WordOccurrences};

/// Generate a prose-like corpus from a fixed vocabulary.
fn generate_test_text(words: usize) -> String {
    let vocabulary = [
        "segmentation",
        "boundary",
        "language",
        "dictionary",
        "candidate",
        "occurrence",
        "contraction",
        "in'n'out",
        "well-known",
        "hello:hello",
        "unicode",
        "script",
        "token",
        "scan",
        "cat",
        "dog",
    ];

    let mut text = String::new();
    for i in 0..words {
        if i > 0 {
            text.push(if i % 12 == 0 { '\n' } else { ' ' });
        }
        text.push_str(vocabulary[i % vocabulary.len()]);
        if i % 7 == 0 {
            text.push(',');
        }
    }
    text
}

/// Benchmark whole-text candidate extraction.
fn bench_spell_check_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell_check_text");

    let mut engine = SpellcheckLanguage::new();
    engine.init("en-US");
    let text = generate_test_text(2000);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("extract_candidates", |b| {
        b.iter(|| {
            let mut occurrences = WordOccurrences::new();
            let words = engine.spell_check_text(black_box(&text), &mut occurrences);
            black_box((words, occurrences))
        })
    });

    // Accumulating into a persistent occurrence list exercises the
    // append-or-increment path instead of fresh inserts.
    group.bench_function("extract_candidates_accumulating", |b| {
        let mut occurrences = WordOccurrences::new();
        b.iter(|| {
            let words = engine.spell_check_text(black_box(&text), &mut occurrences);
            black_box(words)
        })
    });

    group.finish();
}

/// Benchmark contraction decomposition of single tokens.
fn bench_contractions(c: &mut Criterion) {
    let mut group = c.benchmark_group("contractions");

    let mut engine = SpellcheckLanguage::new();
    engine.init("en-US");
    engine.spell_check_text("", &mut WordOccurrences::new());

    let tokens = ["hello", "in'n'out", "hello:hello", "mother-in-law"];
    group.throughput(Throughput::Elements(tokens.len() as u64));
    group.bench_function("split_contraction_batch", |b| {
        b.iter(|| {
            for token in &tokens {
                let parts = engine.split_contraction(black_box(token));
                let _ = black_box(parts);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_spell_check_text, bench_contractions);
criterion_main!(benches);
