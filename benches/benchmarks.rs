//! Benchmarks for the exhaustive law checks.

use std::collections::BTreeSet;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use algebraic_structures::algebra::laws;
use algebraic_structures::algebra::shape::classify;
use algebraic_structures::modular::{self, integers_mod};
use algebraic_structures::{possible_rationals, Field, Operator, Rational, TwoOperators};

fn bench_single_laws(c: &mut Criterion) {
    let mut group = c.benchmark_group("Law Checks");

    for n in [16u64, 32, 64] {
        let elements: BTreeSet<u64> = (0..n).collect();
        let add = modular::add(n);
        let mul = modular::mul(n);

        group.bench_with_input(BenchmarkId::new("closure", n), &n, |bencher, _| {
            bencher.iter(|| laws::closure_witness(black_box(&elements), &add))
        });

        group.bench_with_input(BenchmarkId::new("associativity", n), &n, |bencher, _| {
            bencher.iter(|| laws::associativity_witness(black_box(&elements), &mul))
        });

        group.bench_with_input(BenchmarkId::new("neutral_element", n), &n, |bencher, _| {
            bencher.iter(|| laws::neutral_element(black_box(&elements), &mul))
        });

        group.bench_with_input(BenchmarkId::new("distributivity", n), &n, |bencher, _| {
            bencher.iter(|| laws::distributivity_witness(black_box(&elements), &add, &mul))
        });
    }

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("Classification");

    // Primes classify as fields, composites stop at rings.
    for n in [31u64, 32] {
        let zn = integers_mod(n).into_structure();
        group.bench_with_input(BenchmarkId::new("classify_zn", n), &zn, |bencher, zn| {
            bencher.iter(|| classify(black_box(zn)))
        });
    }

    group.finish();
}

fn bench_rationals(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rationals");

    let q = possible_rationals(-3..=3);
    let add = Operator::new("+", |a: &Rational, b: &Rational| *a + *b);
    let mul = Operator::new("*", |a: &Rational, b: &Rational| *a * *b);
    let field = Field::new(q.iter().copied(), add, mul).with_closure_test(false);

    group.bench_function("possible_rationals_7", |bencher| {
        bencher.iter(|| possible_rationals(black_box(-3..=3)))
    });

    group.bench_function("field_check_sample", |bencher| {
        bencher.iter(|| black_box(&field).is_valid())
    });

    group.finish();
}

criterion_group!(benches, bench_single_laws, bench_classification, bench_rationals);
criterion_main!(benches);
