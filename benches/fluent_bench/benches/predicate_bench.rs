//! Format predicate benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fluent_validate::predicates::{is_numeric, is_valid_credit_card, is_valid_email, is_valid_url};
use fluent_validate::NumberFormat;

fn bench_predicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("predicates");

    group.bench_function("email", |b| {
        b.iter(|| is_valid_email(black_box("some.user+tag@mail.example.com"), None))
    });

    group.bench_function("credit_card", |b| {
        b.iter(|| is_valid_credit_card(black_box("4111 1111 1111 1111")))
    });

    group.bench_function("url", |b| {
        b.iter(|| is_valid_url(black_box("https://example.com/path?q=1")))
    });

    let english = NumberFormat::english();
    group.bench_function("number_default_format", |b| {
        b.iter(|| is_numeric(black_box("1,234,567.89"), &english))
    });

    let german = NumberFormat::german();
    group.bench_function("number_custom_format", |b| {
        b.iter(|| is_numeric(black_box("1.234.567,89"), &german))
    });

    group.finish();
}

criterion_group!(benches, bench_predicates);
criterion_main!(benches);
