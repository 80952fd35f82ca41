//! Benchmark: parse + resolve + format, and canon filtering

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use pericope_core::{AbbrTrie, Canon, CitationStyle, Formatter, ResolveOptions};
use std::hint::black_box;

const CITATIONS: &[(&str, &str)] = &[
    ("single", "John 3:16"),
    ("range", "Col 1:16-4:18"),
    ("related", "Rom 8:28, 30-31, 9:1ff"),
    ("multiple", "Gen 1:1; 2:3; Exod 3; Ps 23, 91"),
    ("whole_book", "Obadiah"),
];

fn bench_resolve_and_format(c: &mut Criterion) {
    let canon = Canon::canonical();
    let trie = AbbrTrie::standard();
    let options = ResolveOptions::with_abbreviations(&trie);
    let formatter = Formatter::new(CitationStyle::Abbreviated).with_abbreviations(&trie);

    let mut group = c.benchmark_group("resolve_and_format");
    for (name, text) in CITATIONS {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| {
                let spans = canon.resolve_str(black_box(text), &options).unwrap();
                black_box(formatter.format(&spans))
            })
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_trie", |b| b.iter(|| black_box(AbbrTrie::standard())));
    c.bench_function("build_canon", |b| b.iter(|| black_box(Canon::canonical())));
}

fn bench_filter(c: &mut Criterion) {
    let canon = Canon::canonical();
    let exclusions = [
        "Colossians 1:1-14",
        "Colossians 1:10-15",
        "Matthew",
        "Mark",
        "Daniel 9",
        "Psalms 109",
    ];
    c.bench_function("filtered", |b| {
        b.iter(|| {
            canon
                .filtered(black_box(&exclusions), &ResolveOptions::default())
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_resolve_and_format, bench_build, bench_filter);
criterion_main!(benches);
