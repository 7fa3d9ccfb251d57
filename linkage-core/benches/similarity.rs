//! Similarity Benchmark - Name Comparison Hot Path
//!
//! Every candidate costs five Jaro-Winkler calls per nickname variant, so
//! these are the inner loop of a registry search.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use linkage_core::hypocorism::build_hypocorism_set;
use linkage_core::nlp::{jaro_winkler_similarity, levenshtein_similarity, triplet_score_arabic};
use linkage_core::normalize::{normalize_arabic_name, normalize_latin_name, normalize_phone};

const LATIN_PAIRS: [(&str, &str); 6] = [
    ("mohammad", "mohamad"),
    ("georges", "george"),
    ("rita", "reeta"),
    ("khoury", "khouri"),
    ("loulou", "lulu"),
    ("abdel rahman", "abdulrahman"),
];

/// Benchmark: single-field similarity.
fn bench_string_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_similarity");
    group.throughput(Throughput::Elements(LATIN_PAIRS.len() as u64));

    group.bench_function("jaro_winkler_latin_pairs", |bench| {
        bench.iter(|| {
            for (a, b) in &LATIN_PAIRS {
                black_box(jaro_winkler_similarity(black_box(a), black_box(b)));
            }
        })
    });

    group.bench_function("levenshtein_latin_pairs", |bench| {
        bench.iter(|| {
            for (a, b) in &LATIN_PAIRS {
                black_box(levenshtein_similarity(black_box(a), black_box(b)));
            }
        })
    });

    group.finish();
}

/// Benchmark: Arabic triplet composite.
fn bench_triplet(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");

    group.bench_function("triplet_score_arabic", |bench| {
        bench.iter(|| {
            black_box(triplet_score_arabic(
                black_box(Some("محمد")),
                black_box(Some("علي")),
                black_box(Some("حسن")),
                black_box(Some("محمود")),
                black_box(Some("علي")),
                black_box(Some("حسين")),
            ))
        })
    });

    group.finish();
}

/// Benchmark: normalization pipelines.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    group.bench_function("arabic_name", |bench| {
        bench.iter(|| black_box(normalize_arabic_name(black_box("أَحْمَـــد بن عليّ ٣"))))
    });

    group.bench_function("latin_name", |bench| {
        bench.iter(|| black_box(normalize_latin_name(black_box("  Jean-François  HÉLÈNE "))))
    });

    group.bench_function("phone", |bench| {
        bench.iter(|| black_box(normalize_phone(black_box("+961 (3) 123-456"))))
    });

    group.finish();
}

/// Benchmark: nickname expansion.
fn bench_hypocorisms(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypocorism");

    group.bench_function("build_both_languages", |bench| {
        bench.iter(|| black_box(build_hypocorism_set(black_box(Some("لولو")), black_box(Some("Lulu")))))
    });

    group.bench_function("build_no_variants", |bench| {
        bench.iter(|| black_box(build_hypocorism_set(black_box(Some("محمد")), black_box(Some("Mohamad")))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_string_similarity,
    bench_triplet,
    bench_normalization,
    bench_hypocorisms,
);

criterion_main!(benches);
