//! Random spot checks
//!
//! For large element sets the exhaustive associativity check is cubic. A spot
//! check samples random triples instead.
//!
//! Run with: cargo run --example spot_check --features rand

#[cfg(not(feature = "rand"))]
fn main() {
    eprintln!("This example requires the `rand` feature.");
    eprintln!("Run with: cargo run --example spot_check --features rand");
    std::process::exit(1);
}

#[cfg(feature = "rand")]
fn main() {
    use algebraic_structures::algebra::sampling::spot_check;
    use algebraic_structures::{modular, AlgebraicStructure, Operator};

    let mut rng = rand::thread_rng();

    let n = 1_000u64;
    let zn = AlgebraicStructure::new(0..n, vec![modular::add(n), modular::mul(n)])
        .expect("two operators given");
    match spot_check(&zn, 10_000, &mut rng) {
        None => println!("Z/{}: no associativity counterexample in 10000 samples", n),
        Some(v) => println!("Z/{}: {}", n, v),
    }

    // Midpoint is commutative but not associative.
    let midpoint = Operator::new("mid", |a: &u64, b: &u64| (a + b) / 2);
    let s = AlgebraicStructure::new(0..n, vec![midpoint]).expect("one operator given");
    match spot_check(&s, 10_000, &mut rng) {
        None => println!("midpoint: no counterexample found"),
        Some(v) => println!("midpoint: {}", v),
    }
}
