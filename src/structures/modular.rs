//! Operators and structures over the integers modulo `n`.

use alloc::format;

use crate::algebra::ring::Ring;
use crate::structures::operator::Operator;

/// Addition modulo `n`.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn add(n: u64) -> Operator<u64> {
    assert!(n > 0, "modulus must be positive");
    Operator::new(format!("+ mod {}", n), move |a: &u64, b: &u64| {
        ((*a as u128 + *b as u128) % n as u128) as u64
    })
}

/// Multiplication modulo `n`.
///
/// # Panics
///
/// Panics if `n == 0`.
pub fn mul(n: u64) -> Operator<u64> {
    assert!(n > 0, "modulus must be positive");
    Operator::new(format!("* mod {}", n), move |a: &u64, b: &u64| {
        ((*a as u128 * *b as u128) % n as u128) as u64
    })
}

/// The ring `(Z/nZ, +, ·)` on the representatives `0..n`.
///
/// # Panics
///
/// Panics if `n == 0`.
///
/// # Example
///
/// ```
/// use algebraic_structures::structures::modular::integers_mod;
/// use algebraic_structures::TwoOperators;
///
/// let z6 = integers_mod(6);
/// assert!(z6.is_valid());
/// assert_eq!(z6.neutral_elements(), (Some(0), Some(1)));
/// assert_eq!(z6.find_inverses(&5).unwrap(), (Some(1), Some(5)));
/// ```
pub fn integers_mod(n: u64) -> Ring<u64> {
    Ring::new(0..n, add(n), mul(n))
}
