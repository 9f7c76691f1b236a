//! Classifying structures
//!
//! Runs a handful of familiar structures through `classify` and prints the
//! first violated law of the next stronger shape.
//!
//! Run with: cargo run --example classify

use algebraic_structures::algebra::shape::{check, classify};
use algebraic_structures::modular::{self, integers_mod};
use algebraic_structures::{AlgebraicStructure, Operator, Shape};

fn report<E: Ord + Clone + std::fmt::Debug>(label: &str, s: &AlgebraicStructure<E>) {
    let shape = classify(s);
    match shape {
        Some(shape) => println!("{:<28} {}", label, shape),
        None => println!("{:<28} unclassified", label),
    }

    let next = Shape::ALL
        .iter()
        .copied()
        .filter(|candidate| candidate.arity() == s.operators().len())
        .find(|candidate| candidate.weaker() == shape);
    if let Some(next) = next {
        if let Err(violation) = check(s, next) {
            println!("{:<28}   not a {}: {}", "", next, violation);
        }
    }
}

fn main() {
    let mul = Operator::new("*", |a: &i64, b: &i64| a * b);
    let max = Operator::new("max", |a: &u8, b: &u8| *a.max(b));
    let sub = Operator::new("-", |a: &i64, b: &i64| a - b);
    let add = Operator::new("+", |a: &i64, b: &i64| a + b);

    report("({0, 1}, *)", &AlgebraicStructure::new([0i64, 1], vec![mul.clone()]).unwrap());
    report("({-1, 1}, *)", &AlgebraicStructure::new([-1i64, 1], vec![mul]).unwrap());
    report("({3, 5, 8}, max)", &AlgebraicStructure::new([3u8, 5, 8], vec![max]).unwrap());
    report("(Z/4, +)", &AlgebraicStructure::new(0u64..4, vec![modular::add(4)]).unwrap());
    report("({-2..2}, -)", &AlgebraicStructure::new(-2i64..=2, vec![sub]).unwrap());
    report("Z/6", &integers_mod(6).into_structure());
    report("Z/7", &integers_mod(7).into_structure());

    // A window onto the integers: only closure fails, so sample it without.
    let window = AlgebraicStructure::new(-4i64..=4, vec![add]).unwrap();
    report("({-4..4}, +)", &window);
    report("({-4..4}, +), no closure", &window.with_closure_test(false));
}
