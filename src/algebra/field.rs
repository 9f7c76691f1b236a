use alloc::vec;

use crate::algebra::group::AbelianGroup;
use crate::algebra::ring::TwoOperators;
use crate::algebra::shape::Shape;
use crate::structures::operator::Operator;
use crate::structures::structure::{AlgebraicStructure, StructureError};

/// A field `(G, +, ·)`.
///
/// Laws checked, in order:
/// - `(G, +, ·)` is a ring
/// - `(G \ {0}, ·)` is an Abelian group, where `0` is the neutral element of `+`
///
/// Zero is removed before the multiplicative laws are checked, since it has
/// no multiplicative inverse.
///
/// # Example
///
/// ```
/// use algebraic_structures::{Field, Operator, TwoOperators};
///
/// let add = |n: u64| Operator::new("+", move |a: &u64, b: &u64| (a + b) % n);
/// let mul = |n: u64| Operator::new("*", move |a: &u64, b: &u64| (a * b) % n);
///
/// assert!(Field::new(0..5, add(5), mul(5)).is_valid());
/// assert!(!Field::new(0..4, add(4), mul(4)).is_valid());
/// ```
#[derive(Clone, Debug)]
pub struct Field<E>(AlgebraicStructure<E>);

impl<E: Ord + Clone> Field<E> {
    /// Create the field candidate `(elements, add, mul)`.
    pub fn new<I>(elements: I, add: Operator<E>, mul: Operator<E>) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self(AlgebraicStructure::from_parts(elements, vec![add, mul]))
    }

    /// Turn closure testing on or off, see
    /// [`AlgebraicStructure::with_closure_test`].
    pub fn with_closure_test(self, enabled: bool) -> Self {
        Self(self.0.with_closure_test(enabled))
    }

    /// Unwrap the underlying structure.
    pub fn into_structure(self) -> AlgebraicStructure<E> {
        self.0
    }

    /// The multiplicative group `(G \ {0}, ·)`.
    pub fn multiplicative_group(&self) -> AbelianGroup<E> {
        AbelianGroup::new(self.elements_without_zero(), self.multiplication().clone())
            .with_closure_test(self.0.tests_for_closure())
    }
}

impl<E: Ord + Clone> TwoOperators<E> for Field<E> {
    const SHAPE: Shape = Shape::Field;

    fn as_structure(&self) -> &AlgebraicStructure<E> {
        &self.0
    }
}

impl<E: Ord + Clone> TryFrom<AlgebraicStructure<E>> for Field<E> {
    type Error = StructureError;

    fn try_from(structure: AlgebraicStructure<E>) -> Result<Self, Self::Error> {
        structure.require_arity(Shape::Field)?;
        Ok(Self(structure))
    }
}

impl<E> AsRef<AlgebraicStructure<E>> for Field<E> {
    fn as_ref(&self) -> &AlgebraicStructure<E> {
        &self.0
    }
}
