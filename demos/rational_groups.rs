//! Rationals as elements
//!
//! `Rational` is ordered and exact, so it can be used directly as the element
//! type of a structure. A finite sample of Q is never closed, so the checks
//! below switch closure testing off.
//!
//! Run with: cargo run --example rational_groups

use algebraic_structures::{
    is_abelian_group, possible_rationals, AbelianGroup, Field, Operator, Rational,
    SingleOperator, TwoOperators,
};

fn main() {
    let add = Operator::new("+", |a: &Rational, b: &Rational| *a + *b);
    let mul = Operator::new("*", |a: &Rational, b: &Rational| *a * *b);

    let q = possible_rationals(-3..=3);
    let shown: Vec<String> = q.iter().map(Rational::to_string).collect();
    println!("sample ({} values): {}", q.len(), shown.join(", "));

    let field = Field::new(q.iter().copied(), add.clone(), mul.clone());
    println!("closed under (+, *): {:?}", field.is_closed());
    if let Err(v) = field.check() {
        println!("with closure test:    {}", v);
    }

    let field = field.with_closure_test(false);
    println!("without closure test: field = {}", field.is_valid());

    let two_thirds = Rational::new(2, 3).unwrap_or(Rational::ONE);
    if let Ok((neg, inv)) = field.find_inverses(&two_thirds) {
        println!("inverses of {}: -> {:?}, {:?}", two_thirds, neg, inv);
    }

    let signs = [Rational::from_integer(-1), Rational::ONE];
    println!("({{-1, 1}}, *) abelian group: {}", is_abelian_group(signs, mul.clone()));
    let group = AbelianGroup::new(signs, mul);
    println!("  neutral element: {:?}", group.neutral_element());
    println!("({{-1, 1}}, +) abelian group: {}", is_abelian_group(signs, add));
}
