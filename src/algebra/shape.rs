//! Classification of structures into semigroups, monoids, groups, Abelian
//! groups, rings and fields.
//!
//! Each shape refines a weaker one. Checking a shape checks the weaker shape
//! first and stops at the first violated law, so a structure satisfying
//! `Field` also satisfies `Ring`, and one satisfying `AbelianGroup` also
//! satisfies `Group`, `Monoid` and `Semigroup`.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::algebra::laws::{self, Violation};
use crate::structures::operator::Operator;
use crate::structures::structure::AlgebraicStructure;

/// The algebraic shapes a structure can be checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// One closed, associative operator.
    Semigroup,
    /// A semigroup with a neutral element.
    Monoid,
    /// A monoid in which every element has an inverse.
    Group,
    /// A commutative group.
    AbelianGroup,
    /// `(G, +)` an Abelian group, `(G, ·)` closed and associative, `·`
    /// distributing over `+`.
    Ring,
    /// A ring whose non-zero elements form an Abelian group under `·`.
    Field,
}

impl Shape {
    /// All shapes, weakest first within each arity.
    pub const ALL: [Shape; 6] = [
        Shape::Semigroup,
        Shape::Monoid,
        Shape::Group,
        Shape::AbelianGroup,
        Shape::Ring,
        Shape::Field,
    ];

    /// Number of operators the shape takes.
    pub const fn arity(self) -> usize {
        match self {
            Shape::Semigroup | Shape::Monoid | Shape::Group | Shape::AbelianGroup => 1,
            Shape::Ring | Shape::Field => 2,
        }
    }

    /// The shape this one refines, if any.
    pub const fn weaker(self) -> Option<Shape> {
        match self {
            Shape::Semigroup | Shape::Ring => None,
            Shape::Monoid => Some(Shape::Semigroup),
            Shape::Group => Some(Shape::Monoid),
            Shape::AbelianGroup => Some(Shape::Group),
            Shape::Field => Some(Shape::Ring),
        }
    }

    /// Human readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Semigroup => "semigroup",
            Shape::Monoid => "monoid",
            Shape::Group => "group",
            Shape::AbelianGroup => "Abelian group",
            Shape::Ring => "ring",
            Shape::Field => "field",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check `structure` against `shape`, returning the first violated law.
///
/// Closure requirements are skipped when the structure has closure testing
/// switched off.
///
/// # Example
///
/// ```
/// use algebraic_structures::algebra::laws::Violation;
/// use algebraic_structures::algebra::shape::{check, Shape};
/// use algebraic_structures::{AlgebraicStructure, Operator};
///
/// let mul = Operator::new("* mod 4", |a: &u32, b: &u32| (a * b) % 4);
/// let s = AlgebraicStructure::new(0u32..4, vec![mul]).unwrap();
///
/// assert_eq!(check(&s, Shape::Monoid), Ok(()));
/// assert_eq!(
///     check(&s, Shape::Group),
///     Err(Violation::NoInverse { operator: 0, element: 0 })
/// );
/// ```
pub fn check<E: Ord + Clone>(
    structure: &AlgebraicStructure<E>,
    shape: Shape,
) -> Result<(), Violation<E>> {
    let ops = structure.operators();
    if ops.len() != shape.arity() {
        return Err(Violation::WrongOperatorCount {
            expected: shape.arity(),
            got: ops.len(),
        });
    }

    let g = structure.elements();
    let closure = structure.tests_for_closure();
    let result = match shape {
        Shape::Semigroup => semigroup_laws(g, &ops[0], 0, closure),
        Shape::Monoid => monoid_laws(g, &ops[0], 0, closure).map(drop),
        Shape::Group => group_laws(g, &ops[0], 0, closure).map(drop),
        Shape::AbelianGroup => abelian_group_laws(g, &ops[0], 0, closure),
        Shape::Ring => ring_laws(g, &ops[0], &ops[1], closure),
        Shape::Field => field_laws(g, &ops[0], &ops[1], closure),
    };
    if let Err(violation) = &result {
        log::debug!("structure is not a {} (operator {:?})", shape, violation.operator());
    }
    result
}

/// Whether `structure` satisfies `shape`.
pub fn satisfies<E: Ord + Clone>(structure: &AlgebraicStructure<E>, shape: Shape) -> bool {
    check(structure, shape).is_ok()
}

/// The strongest shape `structure` satisfies, if any.
///
/// One-operator structures are ranked Semigroup < Monoid < Group <
/// AbelianGroup, two-operator structures Ring < Field. Structures with more
/// operators are never classified.
///
/// # Example
///
/// ```
/// use algebraic_structures::algebra::shape::{classify, Shape};
/// use algebraic_structures::structures::modular::integers_mod;
///
/// assert_eq!(classify(&integers_mod(5).into_structure()), Some(Shape::Field));
/// assert_eq!(classify(&integers_mod(6).into_structure()), Some(Shape::Ring));
/// ```
pub fn classify<E: Ord + Clone>(structure: &AlgebraicStructure<E>) -> Option<Shape> {
    let arity = structure.operators().len();
    Shape::ALL
        .iter()
        .copied()
        .filter(|shape| shape.arity() == arity)
        .take_while(|shape| satisfies(structure, *shape))
        .last()
}

/// Every shape `structure` satisfies, weakest first.
pub fn satisfied_shapes<E: Ord + Clone>(structure: &AlgebraicStructure<E>) -> Vec<Shape> {
    Shape::ALL
        .iter()
        .copied()
        .filter(|shape| satisfies(structure, *shape))
        .collect()
}

/* ---- laws per shape ---- */

fn semigroup_laws<E: Ord + Clone>(
    g: &BTreeSet<E>,
    op: &Operator<E>,
    operator: usize,
    closure: bool,
) -> Result<(), Violation<E>> {
    if closure {
        if let Some((a, b)) = laws::closure_witness(g, op) {
            return Err(Violation::NotClosed { operator, a, b });
        }
    }
    match laws::associativity_witness(g, op) {
        Some((a, b, c)) => Err(Violation::NotAssociative { operator, a, b, c }),
        None => Ok(()),
    }
}

/// Semigroup laws plus a neutral element, which is returned.
fn monoid_laws<E: Ord + Clone>(
    g: &BTreeSet<E>,
    op: &Operator<E>,
    operator: usize,
    closure: bool,
) -> Result<E, Violation<E>> {
    semigroup_laws(g, op, operator, closure)?;
    laws::neutral_element(g, op).ok_or(Violation::NoNeutralElement { operator })
}

fn group_laws<E: Ord + Clone>(
    g: &BTreeSet<E>,
    op: &Operator<E>,
    operator: usize,
    closure: bool,
) -> Result<E, Violation<E>> {
    let e = monoid_laws(g, op, operator, closure)?;
    match laws::inverse_witness(g, op, &e) {
        Some(element) => Err(Violation::NoInverse { operator, element }),
        None => Ok(e),
    }
}

fn abelian_group_laws<E: Ord + Clone>(
    g: &BTreeSet<E>,
    op: &Operator<E>,
    operator: usize,
    closure: bool,
) -> Result<(), Violation<E>> {
    group_laws(g, op, operator, closure)?;
    match laws::commutativity_witness(g, op) {
        Some((a, b)) => Err(Violation::NotCommutative { operator, a, b }),
        None => Ok(()),
    }
}

fn ring_laws<E: Ord + Clone>(
    g: &BTreeSet<E>,
    add: &Operator<E>,
    mul: &Operator<E>,
    closure: bool,
) -> Result<(), Violation<E>> {
    abelian_group_laws(g, add, 0, closure)?;
    semigroup_laws(g, mul, 1, closure)?;
    match laws::distributivity_witness(g, add, mul) {
        Some((a, b, c)) => Err(Violation::NotDistributive { a, b, c }),
        None => Ok(()),
    }
}

fn field_laws<E: Ord + Clone>(
    g: &BTreeSet<E>,
    add: &Operator<E>,
    mul: &Operator<E>,
    closure: bool,
) -> Result<(), Violation<E>> {
    ring_laws(g, add, mul, closure)?;
    let nonzero = laws::without_neutral(g, add);
    abelian_group_laws(&nonzero, mul, 1, closure)
}
