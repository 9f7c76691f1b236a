//! Exhaustive law checks over a finite element set.
//!
//! Each check searches for a counterexample and returns the first one found
//! in ascending element order, or `None` if the law holds. These are the
//! building blocks behind [`AlgebraicStructure`](crate::AlgebraicStructure)
//! and the shape checks, and can be run on any subset of a structure's
//! elements (a field checks its multiplicative laws on `G \ {0}`).

use alloc::collections::BTreeSet;
use core::fmt;

use crate::structures::operator::Operator;

/// A counterexample to an algebraic law.
///
/// `operator` is the position of the offending operator within the structure
/// that was checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation<E> {
    /// `a ∘ b` is not an element of the set.
    NotClosed { operator: usize, a: E, b: E },
    /// `(a ∘ b) ∘ c ≠ a ∘ (b ∘ c)`.
    NotAssociative { operator: usize, a: E, b: E, c: E },
    /// `a ∘ b ≠ b ∘ a`.
    NotCommutative { operator: usize, a: E, b: E },
    /// No element is neutral on both sides.
    NoNeutralElement { operator: usize },
    /// `element` has no two-sided inverse.
    NoInverse { operator: usize, element: E },
    /// One of `a·(b+c) = a·b + a·c` or `(a+b)·c = a·c + b·c` fails.
    NotDistributive { a: E, b: E, c: E },
    /// The structure has the wrong number of operators for the shape.
    WrongOperatorCount { expected: usize, got: usize },
}

impl<E> Violation<E> {
    /// The operator the violation was found for, if it concerns a single one.
    pub fn operator(&self) -> Option<usize> {
        match self {
            Violation::NotClosed { operator, .. }
            | Violation::NotAssociative { operator, .. }
            | Violation::NotCommutative { operator, .. }
            | Violation::NoNeutralElement { operator }
            | Violation::NoInverse { operator, .. } => Some(*operator),
            Violation::NotDistributive { .. } | Violation::WrongOperatorCount { .. } => None,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Violation<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotClosed { operator, a, b } => {
                write!(f, "operator {}: {:?} ∘ {:?} leaves the set", operator, a, b)
            }
            Violation::NotAssociative { operator, a, b, c } => write!(
                f,
                "operator {}: not associative on ({:?}, {:?}, {:?})",
                operator, a, b, c
            ),
            Violation::NotCommutative { operator, a, b } => write!(
                f,
                "operator {}: {:?} ∘ {:?} differs from {:?} ∘ {:?}",
                operator, a, b, b, a
            ),
            Violation::NoNeutralElement { operator } => {
                write!(f, "operator {}: no neutral element", operator)
            }
            Violation::NoInverse { operator, element } => {
                write!(f, "operator {}: {:?} has no inverse", operator, element)
            }
            Violation::NotDistributive { a, b, c } => {
                write!(f, "not distributive on ({:?}, {:?}, {:?})", a, b, c)
            }
            Violation::WrongOperatorCount { expected, got } => {
                write!(f, "expected {} operator(s), got {}", expected, got)
            }
        }
    }
}

/// Find `(a, b)` with `a ∘ b ∉ elements`.
pub fn closure_witness<E: Ord + Clone>(elements: &BTreeSet<E>, op: &Operator<E>) -> Option<(E, E)> {
    for a in elements {
        for b in elements {
            if !elements.contains(&op.apply(a, b)) {
                log::debug!("`{}` is not closed", op.name());
                return Some((a.clone(), b.clone()));
            }
        }
    }
    None
}

/// Find `(a, b, c)` with `(a ∘ b) ∘ c ≠ a ∘ (b ∘ c)`.
pub fn associativity_witness<E: Ord + Clone>(
    elements: &BTreeSet<E>,
    op: &Operator<E>,
) -> Option<(E, E, E)> {
    for a in elements {
        for b in elements {
            let ab = op.apply(a, b);
            for c in elements {
                let bc = op.apply(b, c);
                if op.apply(&ab, c) != op.apply(a, &bc) {
                    log::debug!("`{}` is not associative", op.name());
                    return Some((a.clone(), b.clone(), c.clone()));
                }
            }
        }
    }
    None
}

/// Find `(a, b)` with `a ∘ b ≠ b ∘ a`.
///
/// Only pairs with `a < b` are evaluated; the diagonal and mirrored pairs
/// cannot fail.
pub fn commutativity_witness<E: Ord + Clone>(
    elements: &BTreeSet<E>,
    op: &Operator<E>,
) -> Option<(E, E)> {
    for (i, a) in elements.iter().enumerate() {
        for b in elements.iter().skip(i + 1) {
            if op.apply(a, b) != op.apply(b, a) {
                log::debug!("`{}` is not commutative", op.name());
                return Some((a.clone(), b.clone()));
            }
        }
    }
    None
}

/// Whether `e ∘ x = x = x ∘ e` for every `x` in `elements`.
pub fn is_neutral<E: Ord + Clone>(elements: &BTreeSet<E>, op: &Operator<E>, e: &E) -> bool {
    elements
        .iter()
        .all(|x| op.apply(e, x) == *x && op.apply(x, e) == *x)
}

/// The smallest neutral element of `op` in `elements`, if any.
pub fn neutral_element<E: Ord + Clone>(elements: &BTreeSet<E>, op: &Operator<E>) -> Option<E> {
    let found = elements.iter().find(|e| is_neutral(elements, op, e)).cloned();
    if found.is_none() {
        log::debug!("`{}` has no neutral element", op.name());
    }
    found
}

/// The smallest `y` in `elements` with `x ∘ y = e = y ∘ x`.
///
/// `x` itself need not be a member of `elements`.
pub fn inverse_of<E: Ord + Clone>(
    elements: &BTreeSet<E>,
    op: &Operator<E>,
    e: &E,
    x: &E,
) -> Option<E> {
    elements
        .iter()
        .find(|y| op.apply(x, y) == *e && op.apply(y, x) == *e)
        .cloned()
}

/// Find an element without an inverse with respect to the neutral element `e`.
pub fn inverse_witness<E: Ord + Clone>(elements: &BTreeSet<E>, op: &Operator<E>, e: &E) -> Option<E> {
    let missing = elements
        .iter()
        .find(|x| inverse_of(elements, op, e, x).is_none())
        .cloned();
    if missing.is_some() {
        log::debug!("`{}` lacks an inverse", op.name());
    }
    missing
}

/// `elements` without the neutral element of `op`.
///
/// Returns all of `elements` when `op` has no neutral element.
pub fn without_neutral<E: Ord + Clone>(elements: &BTreeSet<E>, op: &Operator<E>) -> BTreeSet<E> {
    let mut rest = elements.clone();
    if let Some(e) = neutral_element(elements, op) {
        rest.remove(&e);
    }
    rest
}

/// Find `(a, b, c)` where `mul` fails to distribute over `add` from either side.
pub fn distributivity_witness<E: Ord + Clone>(
    elements: &BTreeSet<E>,
    add: &Operator<E>,
    mul: &Operator<E>,
) -> Option<(E, E, E)> {
    for a in elements {
        for b in elements {
            for c in elements {
                let left = mul.apply(a, &add.apply(b, c))
                    == add.apply(&mul.apply(a, b), &mul.apply(a, c));
                let right = mul.apply(&add.apply(a, b), c)
                    == add.apply(&mul.apply(a, c), &mul.apply(b, c));
                if !(left && right) {
                    log::debug!("`{}` does not distribute over `{}`", mul.name(), add.name());
                    return Some((a.clone(), b.clone(), c.clone()));
                }
            }
        }
    }
    None
}

/// Whether `f(a, b) = g(a, b)` for all `a, b` in `elements`.
pub fn agree_on<E: Ord + Clone>(elements: &BTreeSet<E>, f: &Operator<E>, g: &Operator<E>) -> bool {
    if f.same_as(g) {
        return true;
    }
    elements
        .iter()
        .all(|a| elements.iter().all(|b| f.apply(a, b) == g.apply(a, b)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn set(range: core::ops::Range<i64>) -> BTreeSet<i64> {
        range.collect()
    }

    fn sub() -> Operator<i64> {
        Operator::new("-", |a: &i64, b: &i64| a - b)
    }

    fn add_mod(n: i64) -> Operator<i64> {
        Operator::new("+", move |a: &i64, b: &i64| (a + b).rem_euclid(n))
    }

    fn mul_mod(n: i64) -> Operator<i64> {
        Operator::new("*", move |a: &i64, b: &i64| (a * b).rem_euclid(n))
    }

    #[test]
    fn closure_counterexample_is_smallest() {
        assert_eq!(closure_witness(&set(0..3), &sub()), Some((0, 1)));
        assert_eq!(closure_witness(&set(0..3), &add_mod(3)), None);
    }

    #[test]
    fn associativity_counterexample() {
        assert_eq!(associativity_witness(&set(0..3), &sub()), Some((0, 0, 1)));
        assert_eq!(associativity_witness(&set(0..5), &mul_mod(5)), None);
    }

    #[test]
    fn associativity_is_literal_outside_the_set() {
        let add = Operator::new("+", |a: &i64, b: &i64| a + b);
        assert_eq!(closure_witness(&set(0..3), &add), Some((1, 2)));
        assert_eq!(associativity_witness(&set(0..3), &add), None);
    }

    #[test]
    fn commutativity_counterexample() {
        assert_eq!(commutativity_witness(&set(0..3), &sub()), Some((0, 1)));
        let left = Operator::new("left", |a: &i64, _b: &i64| *a);
        assert_eq!(commutativity_witness(&set(4..6), &left), Some((4, 5)));
        assert_eq!(commutativity_witness(&set(0..4), &add_mod(4)), None);
    }

    #[test]
    fn neutral_and_inverses() {
        let z5 = set(0..5);
        assert_eq!(neutral_element(&z5, &add_mod(5)), Some(0));
        assert_eq!(neutral_element(&z5, &mul_mod(5)), Some(1));
        assert_eq!(neutral_element(&z5, &sub()), None);
        assert_eq!(inverse_of(&z5, &mul_mod(5), &1, &2), Some(3));
        assert_eq!(inverse_of(&z5, &mul_mod(5), &1, &0), None);
        assert_eq!(inverse_witness(&z5, &mul_mod(5), &1), Some(0));

        let nonzero = set(1..5);
        assert_eq!(inverse_witness(&nonzero, &mul_mod(5), &1), None);
    }

    #[test]
    fn first_of_several_inverses() {
        // 0 is neutral and any two non-zero elements combine to 0, so every
        // non-zero element is an inverse of every other.
        let op = Operator::new("collapse", |a: &i64, b: &i64| match (a, b) {
            (0, x) | (x, 0) => *x,
            _ => 0,
        });
        let g = set(0..3);
        assert_eq!(neutral_element(&g, &op), Some(0));
        assert_eq!(inverse_of(&g, &op, &0, &1), Some(1));
        assert_eq!(inverse_of(&g, &op, &0, &2), Some(1));
        assert_eq!(inverse_witness(&g, &op, &0), None);
        assert!(associativity_witness(&g, &op).is_some());
    }

    #[test]
    fn empty_set() {
        let empty = BTreeSet::new();
        assert_eq!(closure_witness(&empty, &sub()), None);
        assert_eq!(associativity_witness(&empty, &sub()), None);
        assert_eq!(commutativity_witness(&empty, &sub()), None);
        assert_eq!(neutral_element(&empty, &sub()), None);
        assert_eq!(distributivity_witness(&empty, &sub(), &sub()), None);
    }

    #[test]
    fn distributivity() {
        let z4 = set(0..4);
        assert_eq!(distributivity_witness(&z4, &add_mod(4), &mul_mod(4)), None);
        assert!(distributivity_witness(&z4, &mul_mod(4), &add_mod(4)).is_some());
    }

    #[test]
    fn removing_the_zero() {
        let z5 = set(0..5);
        assert_eq!(without_neutral(&z5, &add_mod(5)), set(1..5));
        assert_eq!(without_neutral(&z5, &sub()), z5);
    }

    #[test]
    fn agreement() {
        let z4 = set(0..4);
        let masked = Operator::new("&", |a: &i64, b: &i64| (a + b) & 3);
        assert!(agree_on(&z4, &add_mod(4), &masked));
        assert!(!agree_on(&z4, &add_mod(4), &add_mod(3)));
        assert!(agree_on(&set(0..1), &add_mod(4), &add_mod(3)));
    }

    #[test]
    fn violation_display() {
        let v = Violation::NotClosed {
            operator: 0,
            a: 1,
            b: 2,
        };
        assert_eq!(format!("{}", v), "operator 0: 1 ∘ 2 leaves the set");
        assert_eq!(v.operator(), Some(0));

        let d = Violation::NotDistributive { a: 0, b: 1, c: 2 };
        assert_eq!(d.operator(), None);
    }
}
