use alloc::collections::BTreeSet;
use alloc::vec;

use crate::algebra::group::AbelianGroup;
use crate::algebra::laws::{self, Violation};
use crate::algebra::shape::{self, Shape};
use crate::structures::operator::Operator;
use crate::structures::structure::{AlgebraicStructure, StructureError};

/// A structure `(G, +, ·)` with an addition and a multiplication.
///
/// Pairs are returned in operator order: addition first.
pub trait TwoOperators<E: Ord + Clone> {
    /// The shape whose laws `is_valid` checks.
    const SHAPE: Shape;

    /// The underlying structure.
    fn as_structure(&self) -> &AlgebraicStructure<E>;

    /// The element set `G`.
    fn elements(&self) -> &BTreeSet<E> {
        self.as_structure().elements()
    }

    /// The first operator, `+`.
    fn addition(&self) -> &Operator<E> {
        &self.as_structure().operators()[0]
    }

    /// The second operator, `·`.
    fn multiplication(&self) -> &Operator<E> {
        &self.as_structure().operators()[1]
    }

    /// Closure under `+` and `·`.
    fn is_closed(&self) -> (bool, bool) {
        pair(self.as_structure().is_closed())
    }

    /// Associativity of `+` and `·`.
    fn is_associative(&self) -> (bool, bool) {
        pair(self.as_structure().is_associative())
    }

    /// Commutativity of `+` and `·`.
    fn is_commutative(&self) -> (bool, bool) {
        pair(self.as_structure().is_commutative())
    }

    /// Neutral elements of `+` and `·`.
    fn neutral_elements(&self) -> (Option<E>, Option<E>) {
        (self.zero(), self.one())
    }

    /// The neutral element of `+`.
    fn zero(&self) -> Option<E> {
        laws::neutral_element(self.elements(), self.addition())
    }

    /// The neutral element of `·`.
    fn one(&self) -> Option<E> {
        laws::neutral_element(self.elements(), self.multiplication())
    }

    /// Whether every element has an inverse under `+` and under `·`.
    fn has_inverses(&self) -> (bool, bool) {
        pair(self.as_structure().has_inverses())
    }

    /// Inverses of `x` under `+` and `·`.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::NotAnElement` if `x` is not in `G`.
    fn find_inverses(&self, x: &E) -> Result<(Option<E>, Option<E>), StructureError> {
        let mut inverses = self.as_structure().find_inverses_per_operator(x)?.into_iter();
        Ok((inverses.next().flatten(), inverses.next().flatten()))
    }

    /// Whether `·` distributes over `+` from both sides.
    fn is_distributive(&self) -> bool {
        laws::distributivity_witness(self.elements(), self.addition(), self.multiplication())
            .is_none()
    }

    /// `G` without the neutral element of `+`.
    ///
    /// All of `G` if `+` has no neutral element.
    fn elements_without_zero(&self) -> BTreeSet<E> {
        laws::without_neutral(self.elements(), self.addition())
    }

    /// The additive group `(G, +)`.
    fn additive_group(&self) -> AbelianGroup<E> {
        AbelianGroup::new(self.elements().iter().cloned(), self.addition().clone())
            .with_closure_test(self.as_structure().tests_for_closure())
    }

    /// The first law of the shape that the structure violates.
    fn check(&self) -> Result<(), Violation<E>> {
        shape::check(self.as_structure(), Self::SHAPE)
    }

    /// Whether the structure satisfies its shape's laws.
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

fn pair(values: alloc::vec::Vec<bool>) -> (bool, bool) {
    (values[0], values[1])
}

/// A ring `(G, +, ·)`.
///
/// `(G, +)` is an Abelian group, `·` is closed and associative, and `·`
/// distributes over `+` from both sides. No multiplicative identity is
/// required.
///
/// # Example
///
/// ```
/// use algebraic_structures::{Operator, Ring, TwoOperators};
///
/// let add = Operator::new("+", |a: &u32, b: &u32| (a + b) % 4);
/// let mul = Operator::new("*", |a: &u32, b: &u32| (a * b) % 4);
/// let z4 = Ring::new(0..4, add, mul);
///
/// assert!(z4.is_valid());
/// assert_eq!(z4.elements_without_zero().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(z4.find_inverses(&2).unwrap(), (Some(2), None));
/// ```
#[derive(Clone, Debug)]
pub struct Ring<E>(AlgebraicStructure<E>);

impl<E: Ord + Clone> Ring<E> {
    /// Create the ring candidate `(elements, add, mul)`.
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
}

impl<E: Ord + Clone> TwoOperators<E> for Ring<E> {
    const SHAPE: Shape = Shape::Ring;

    fn as_structure(&self) -> &AlgebraicStructure<E> {
        &self.0
    }
}

impl<E: Ord + Clone> TryFrom<AlgebraicStructure<E>> for Ring<E> {
    type Error = StructureError;

    fn try_from(structure: AlgebraicStructure<E>) -> Result<Self, Self::Error> {
        structure.require_arity(Shape::Ring)?;
        Ok(Self(structure))
    }
}

impl<E> AsRef<AlgebraicStructure<E>> for Ring<E> {
    fn as_ref(&self) -> &AlgebraicStructure<E> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::group::SingleOperator;
    use alloc::vec::Vec;

    fn zn(n: u32) -> Ring<u32> {
        Ring::new(
            0..n,
            Operator::new("+", move |a: &u32, b: &u32| (a + b) % n),
            Operator::new("*", move |a: &u32, b: &u32| (a * b) % n),
        )
    }

    #[test]
    fn z4_is_a_ring() {
        let z4 = zn(4);
        assert!(z4.is_valid());
        assert_eq!(z4.is_closed(), (true, true));
        assert_eq!(z4.is_associative(), (true, true));
        assert_eq!(z4.is_commutative(), (true, true));
        assert_eq!(z4.neutral_elements(), (Some(0), Some(1)));
        assert_eq!(z4.has_inverses(), (true, false));
        assert!(z4.is_distributive());
        assert_eq!(
            z4.elements_without_zero().into_iter().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn even_integers_mod_8_have_no_one() {
        let add = Operator::new("+", |a: &u32, b: &u32| (a + b) % 8);
        let mul = Operator::new("*", |a: &u32, b: &u32| (a * b) % 8);
        let r = Ring::new([0u32, 2, 4, 6], add, mul);
        assert!(r.is_valid());
        assert_eq!(r.one(), None);
    }

    #[test]
    fn integers_under_max_min_are_not_a_ring() {
        let max = Operator::new("max", |a: &i32, b: &i32| *a.max(b));
        let min = Operator::new("min", |a: &i32, b: &i32| *a.min(b));
        let r = Ring::new(0..3, max, min);
        assert!(!r.additive_group().is_valid());
        assert_eq!(
            r.check(),
            Err(Violation::NoInverse {
                operator: 0,
                element: 1
            })
        );
    }

    #[test]
    fn left_distributivity_alone_is_not_enough() {
        // a · b = b over Z2: left distributive, not right distributive.
        let add = Operator::new("+", |a: &u8, b: &u8| (a + b) % 2);
        let right = Operator::new("right", |_a: &u8, b: &u8| *b);
        let r = Ring::new(0u8..2, add, right);
        assert!(!r.is_distributive());
        assert_eq!(r.check(), Err(Violation::NotDistributive { a: 0, b: 0, c: 1 }));
    }

    #[test]
    fn inverses_of_foreign_value() {
        assert_eq!(zn(3).find_inverses(&3), Err(StructureError::NotAnElement));
        assert_eq!(zn(3).find_inverses(&2), Ok((Some(1), Some(2))));
    }

    #[test]
    fn arity_is_checked_on_conversion() {
        let add = Operator::new("+", |a: &u32, b: &u32| (a + b) % 2);
        let one = AlgebraicStructure::new(0u32..2, vec![add]).unwrap();
        assert_eq!(
            Ring::try_from(one).unwrap_err(),
            StructureError::WrongOperatorCount {
                shape: "ring",
                expected: 2,
                got: 1
            }
        );
        assert!(Ring::try_from(zn(2).into_structure()).is_ok());
    }
}
