//! Validation overhead benchmarks
//!
//! Benchmarks rule registration and evaluation for a typical signup form.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fluent_validate::prelude::*;

#[derive(Properties)]
struct Signup {
    name: String,
    email: String,
    age: u32,
    card: String,
    website: Option<String>,
}

fn valid_signup() -> Signup {
    Signup {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        age: 36,
        card: "4111 1111 1111 1111".to_string(),
        website: Some("https://example.com".to_string()),
    }
}

fn invalid_signup() -> Signup {
    Signup {
        name: "A".to_string(),
        email: "not-an-email".to_string(),
        age: 250,
        card: "1234567890123".to_string(),
        website: Some("example".to_string()),
    }
}

fn signup_validator() -> Validator<Signup> {
    let mut validator = Validator::new();
    validator
        .rule_for(Signup::NAME)
        .not_empty()
        .length(2, 64)
        .rule_for(Signup::EMAIL)
        .email()
        .rule_for(Signup::AGE)
        .greater_than_or_equal_to(18)
        .less_than(130)
        .rule_for(Signup::CARD)
        .credit_card()
        .rule_for(Signup::WEBSITE)
        .some_url();
    validator
}

/// Benchmark building a validator
fn bench_registration(c: &mut Criterion) {
    c.bench_function("register_signup_rules", |b| {
        b.iter(|| black_box(signup_validator()))
    });
}

/// Benchmark evaluating valid and invalid models
fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");
    let valid = valid_signup();
    let invalid = invalid_signup();

    group.bench_function("validate_valid", |b| {
        let mut validator = signup_validator();
        b.iter(|| validator.validate(black_box(&valid)))
    });

    group.bench_function("validate_invalid", |b| {
        let mut validator = signup_validator();
        b.iter(|| validator.validate(black_box(&invalid)))
    });

    group.bench_function("evaluate_invalid", |b| {
        let validator = signup_validator();
        b.iter(|| validator.evaluate(black_box(&invalid)))
    });

    group.finish();
}

criterion_group!(benches, bench_registration, bench_evaluation);
criterion_main!(benches);
