//! Benchmarks for per-keystroke completion matching.
//!
//! Run with: `cargo bench --package ftui-completion --bench matcher_bench`
//!
//! Covers the default prefix template, a multi-template set that forces a
//! second pass, and a capped query that stops early.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ftui_completion::{CompletionConfig, Limit, Matcher, PatternSet, SelectionSet};
use std::hint::black_box;

const WORDS: &[&str] = &[
    "apple", "apricot", "avocado", "banana", "blackberry", "blueberry", "cherry", "clementine",
    "coconut", "cranberry", "date", "dragonfruit", "elderberry", "fig", "grape", "grapefruit",
    "guava", "kiwi", "lemon", "lime", "mango", "melon", "nectarine", "orange", "papaya", "peach",
    "pear", "pineapple", "plum", "pomegranate", "raspberry", "strawberry", "tangerine",
];

/// Pool of roughly `size` candidates built from `WORDS` with numeric suffixes.
fn generate_pool(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| format!("{} {}", WORDS[i % WORDS.len()], i / WORDS.len()))
        .collect()
}

fn bench_prefix(c: &mut Criterion) {
    let mut group = c.benchmark_group("completion/prefix");
    let selection = SelectionSet::new(Limit::Unbounded);
    let config = CompletionConfig::default();

    for size in [100usize, 1_000, 10_000] {
        let matcher = Matcher::new(generate_pool(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &matcher, |b, m| {
            b.iter(|| black_box(m.complete(black_box("ap"), &config, &selection)));
        });
    }
    group.finish();
}

fn bench_multi_template(c: &mut Criterion) {
    let mut group = c.benchmark_group("completion/multi_template");
    let selection = SelectionSet::new(Limit::Unbounded);
    let config = CompletionConfig::default();
    let patterns = PatternSet::default().with_template("^.*\\b#@");

    for size in [100usize, 1_000] {
        let matcher = Matcher::new(generate_pool(size)).with_patterns(patterns.clone());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &matcher, |b, m| {
            b.iter(|| black_box(m.complete(black_box("berry"), &config, &selection)));
        });
    }
    group.finish();
}

fn bench_capped(c: &mut Criterion) {
    let selection = SelectionSet::new(Limit::Unbounded);
    let config = CompletionConfig::default().with_max_results(Limit::AtMost(8));
    let matcher = Matcher::new(generate_pool(10_000));

    c.bench_function("completion/capped_10k", |b| {
        b.iter(|| black_box(matcher.complete(black_box("p"), &config, &selection)));
    });
}

criterion_group!(benches, bench_prefix, bench_multi_template, bench_capped);
criterion_main!(benches);
