//! One-operator shapes: semigroups, monoids, groups and Abelian groups.
//!
//! Each wrapper holds an [`AlgebraicStructure`] with exactly one operator and
//! narrows `is_valid` to its shape's laws. The shared queries live on
//! [`SingleOperator`] and return plain values instead of one-element vectors.

use alloc::collections::BTreeSet;
use alloc::vec;

use crate::algebra::laws::{self, Violation};
use crate::algebra::shape::{self, Shape};
use crate::structures::operator::Operator;
use crate::structures::structure::{AlgebraicStructure, StructureError};

/// A structure `(G, ∘)` with a single operator.
pub trait SingleOperator<E: Ord + Clone> {
    /// The shape whose laws `is_valid` checks.
    const SHAPE: Shape;

    /// The underlying structure.
    fn as_structure(&self) -> &AlgebraicStructure<E>;

    /// The element set `G`.
    fn elements(&self) -> &BTreeSet<E> {
        self.as_structure().elements()
    }

    /// The operator `∘`.
    fn operator(&self) -> &Operator<E> {
        &self.as_structure().operators()[0]
    }

    /// Whether `G` is closed under `∘`.
    fn is_closed(&self) -> bool {
        laws::closure_witness(self.elements(), self.operator()).is_none()
    }

    /// Whether `∘` is associative over `G`.
    fn is_associative(&self) -> bool {
        laws::associativity_witness(self.elements(), self.operator()).is_none()
    }

    /// Whether `∘` is commutative over `G`.
    fn is_commutative(&self) -> bool {
        laws::commutativity_witness(self.elements(), self.operator()).is_none()
    }

    /// The neutral element of `∘`, if there is one.
    fn neutral_element(&self) -> Option<E> {
        laws::neutral_element(self.elements(), self.operator())
    }

    /// Whether a neutral element exists and every element has an inverse.
    fn has_inverses(&self) -> bool {
        match self.neutral_element() {
            Some(e) => laws::inverse_witness(self.elements(), self.operator(), &e).is_none(),
            None => false,
        }
    }

    /// An inverse of `x`, or `None` if `x` has none.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::NotAnElement` if `x` is not in `G`.
    fn find_inverse(&self, x: &E) -> Result<Option<E>, StructureError> {
        self.as_structure().find_inverse(0, x)
    }

    /// The first law of the shape that `G` violates.
    fn check(&self) -> Result<(), Violation<E>> {
        shape::check(self.as_structure(), Self::SHAPE)
    }

    /// Whether the structure satisfies its shape's laws.
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

macro_rules! one_operator_shape {
    ($(#[$doc:meta])* $name:ident, $shape:expr) => {
        $(#[$doc])*
        #[derive(Clone, Debug)]
        pub struct $name<E>(AlgebraicStructure<E>);

        impl<E: Ord + Clone> $name<E> {
            /// Create the structure `(elements, op)`.
            pub fn new<I>(elements: I, op: Operator<E>) -> Self
            where
                I: IntoIterator<Item = E>,
            {
                Self(AlgebraicStructure::from_parts(elements, vec![op]))
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
        }

        impl<E: Ord + Clone> SingleOperator<E> for $name<E> {
            const SHAPE: Shape = $shape;

            fn as_structure(&self) -> &AlgebraicStructure<E> {
                &self.0
            }
        }

        impl<E: Ord + Clone> TryFrom<AlgebraicStructure<E>> for $name<E> {
            type Error = StructureError;

            fn try_from(structure: AlgebraicStructure<E>) -> Result<Self, Self::Error> {
                structure.require_arity($shape)?;
                Ok(Self(structure))
            }
        }

        impl<E> AsRef<AlgebraicStructure<E>> for $name<E> {
            fn as_ref(&self) -> &AlgebraicStructure<E> {
                &self.0
            }
        }
    };
}

one_operator_shape!(
    /// A semigroup `(G, ∘)`: `∘` is closed and associative.
    ///
    /// # Example
    ///
    /// ```
    /// use algebraic_structures::{Operator, Semigroup, SingleOperator};
    ///
    /// let max = Operator::new("max", |a: &u8, b: &u8| *a.max(b));
    /// let s = Semigroup::new([3u8, 5, 8], max);
    /// assert!(s.is_valid());
    /// assert_eq!(s.neutral_element(), Some(3));
    /// ```
    Semigroup,
    Shape::Semigroup
);

one_operator_shape!(
    /// A monoid `(G, ∘)`: a semigroup with a neutral element.
    ///
    /// # Example
    ///
    /// ```
    /// use algebraic_structures::{Monoid, Operator, SingleOperator};
    ///
    /// let mul = Operator::new("*", |a: &i32, b: &i32| a * b);
    /// let m = Monoid::new([0, 1], mul);
    /// assert!(m.is_valid());
    /// assert_eq!(m.neutral_element(), Some(1));
    /// assert_eq!(m.find_inverse(&0).unwrap(), None);
    /// ```
    Monoid,
    Shape::Monoid
);

one_operator_shape!(
    /// A group `(G, ∘)`: a monoid in which every element has an inverse.
    Group,
    Shape::Group
);

one_operator_shape!(
    /// An Abelian group `(G, ∘)`: a commutative group.
    AbelianGroup,
    Shape::AbelianGroup
);

/// Whether `(elements, op)` forms a group.
///
/// # Example
///
/// ```
/// use algebraic_structures::{is_group, Operator};
///
/// let add_mod_4 = Operator::new("+ mod 4", |a: &u32, b: &u32| (a + b) % 4);
/// assert!(is_group(0..4, add_mod_4));
///
/// let add = Operator::new("+", |a: &i32, b: &i32| a + b);
/// assert!(!is_group(-4..=4, add));
/// ```
pub fn is_group<E, I>(elements: I, op: Operator<E>) -> bool
where
    E: Ord + Clone,
    I: IntoIterator<Item = E>,
{
    Group::new(elements, op).is_valid()
}

/// Whether `(elements, op)` forms an Abelian group.
pub fn is_abelian_group<E, I>(elements: I, op: Operator<E>) -> bool
where
    E: Ord + Clone,
    I: IntoIterator<Item = E>,
{
    AbelianGroup::new(elements, op).is_valid()
}
