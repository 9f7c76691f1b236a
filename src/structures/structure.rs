//! The base algebraic structure `(G, ∘₁, …, ∘ₙ)`.
//!
//! This module provides:
//! - `AlgebraicStructure`, a finite element set paired with an ordered
//!   sequence of binary operators, and the per-operator law checks over it
//! - `StructureError`, the construction and lookup failures
//! - The substructure relation between two structures

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::algebra::laws;
use crate::algebra::shape::Shape;
use crate::structures::operator::Operator;

/// Error type for building and querying structures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A structure was built without any operator.
    NoOperators,
    /// A fixed-arity shape was given the wrong number of operators.
    WrongOperatorCount {
        shape: &'static str,
        expected: usize,
        got: usize,
    },
    /// The queried value is not a member of the element set.
    NotAnElement,
    /// There is no operator at the requested position.
    NoSuchOperator { index: usize, count: usize },
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureError::NoOperators => write!(f, "a structure needs at least one operator"),
            StructureError::WrongOperatorCount {
                shape,
                expected,
                got,
            } => write!(
                f,
                "a {} takes exactly {} operator(s), got {}",
                shape, expected, got
            ),
            StructureError::NotAnElement => write!(f, "value is not an element of the structure"),
            StructureError::NoSuchOperator { index, count } => write!(
                f,
                "no operator at position {} (structure has {})",
                index, count
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StructureError {}

/// A finite set `G` together with binary operators `∘₁, …, ∘ₙ`.
///
/// Every query enumerates the element set exhaustively: closure and
/// commutativity look at all of `G × G`, associativity at all of `G³`.
/// Elements are kept in a `BTreeSet`, so enumeration runs in ascending order
/// and "first found" results (neutral elements, inverses) are the smallest
/// qualifying element.
///
/// The structure is immutable once built. Queries are pure and may be run
/// from several threads at once.
///
/// # Example
///
/// ```
/// use algebraic_structures::{AlgebraicStructure, Operator};
///
/// let add = Operator::new("+ mod 3", |a: &u8, b: &u8| (a + b) % 3);
/// let g = AlgebraicStructure::new([0u8, 1, 2], vec![add]).unwrap();
///
/// assert!(g.is_valid());
/// assert_eq!(g.neutral_elements(), vec![Some(0)]);
/// assert_eq!(g.find_inverse(0, &1).unwrap(), Some(2));
/// ```
#[derive(Clone)]
pub struct AlgebraicStructure<E> {
    elements: BTreeSet<E>,
    operators: Vec<Operator<E>>,
    test_for_closure: bool,
}

impl<E: Ord + Clone> AlgebraicStructure<E> {
    /// Create a structure from elements and an ordered list of operators.
    ///
    /// Duplicate elements are collapsed. Closure testing is on.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::NoOperators` if `operators` is empty.
    pub fn new<I>(elements: I, operators: Vec<Operator<E>>) -> Result<Self, StructureError>
    where
        I: IntoIterator<Item = E>,
    {
        if operators.is_empty() {
            return Err(StructureError::NoOperators);
        }
        let elements: BTreeSet<E> = elements.into_iter().collect();
        log::trace!(
            "structure over {} element(s) with {} operator(s)",
            elements.len(),
            operators.len()
        );
        Ok(Self {
            elements,
            operators,
            test_for_closure: true,
        })
    }

    /// Build from parts whose operator count the caller already fixed.
    pub(crate) fn from_parts<I>(elements: I, operators: Vec<Operator<E>>) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        debug_assert!(!operators.is_empty());
        Self {
            elements: elements.into_iter().collect(),
            operators,
            test_for_closure: true,
        }
    }

    /// Reject structures whose operator count does not match `shape`.
    pub(crate) fn require_arity(&self, shape: Shape) -> Result<(), StructureError> {
        if self.operators.len() == shape.arity() {
            Ok(())
        } else {
            Err(StructureError::WrongOperatorCount {
                shape: shape.name(),
                expected: shape.arity(),
                got: self.operators.len(),
            })
        }
    }

    /// Turn closure testing on or off.
    ///
    /// With closure testing off, validity never requires closure. This is
    /// useful when `G` is a finite window onto an infinite set, such as a range
    /// of integers under addition. [`is_closed`](Self::is_closed) still reports
    /// the literal result.
    pub fn with_closure_test(mut self, enabled: bool) -> Self {
        self.test_for_closure = enabled;
        self
    }

    /// Whether validity checks require closure.
    pub fn tests_for_closure(&self) -> bool {
        self.test_for_closure
    }

    /// The element set `G`.
    pub fn elements(&self) -> &BTreeSet<E> {
        &self.elements
    }

    /// The operators, in construction order.
    pub fn operators(&self) -> &[Operator<E>] {
        &self.operators
    }

    /// The operator at position `index`.
    pub fn operator(&self, index: usize) -> Result<&Operator<E>, StructureError> {
        self.operators
            .get(index)
            .ok_or(StructureError::NoSuchOperator {
                index,
                count: self.operators.len(),
            })
    }

    /// Number of elements in `G`.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether `G` is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether `x` is an element of `G`.
    pub fn contains(&self, x: &E) -> bool {
        self.elements.contains(x)
    }

    /// For every operator, whether `G` is closed under it.
    pub fn is_closed(&self) -> Vec<bool> {
        self.operators
            .iter()
            .map(|op| laws::closure_witness(&self.elements, op).is_none())
            .collect()
    }

    /// For every operator, whether it is associative over `G`.
    ///
    /// The check is literal: `(a∘b)∘c` and `a∘(b∘c)` are compared even when
    /// an intermediate result lies outside `G`.
    pub fn is_associative(&self) -> Vec<bool> {
        self.operators
            .iter()
            .map(|op| laws::associativity_witness(&self.elements, op).is_none())
            .collect()
    }

    /// For every operator, whether it is commutative over `G`.
    pub fn is_commutative(&self) -> Vec<bool> {
        self.operators
            .iter()
            .map(|op| laws::commutativity_witness(&self.elements, op).is_none())
            .collect()
    }

    /// For every operator, its neutral element, or `None` if it has none.
    ///
    /// The search runs in ascending order and stops at the first element
    /// neutral on both sides.
    pub fn neutral_elements(&self) -> Vec<Option<E>> {
        self.operators
            .iter()
            .map(|op| laws::neutral_element(&self.elements, op))
            .collect()
    }

    /// For every operator, whether it has a neutral element and every element
    /// of `G` has an inverse with respect to it.
    pub fn has_inverses(&self) -> Vec<bool> {
        self.operators
            .iter()
            .map(|op| match laws::neutral_element(&self.elements, op) {
                Some(e) => laws::inverse_witness(&self.elements, op, &e).is_none(),
                None => false,
            })
            .collect()
    }

    /// For every operator, an inverse of `x`, or `None` if the operator has
    /// no neutral element or `x` has no inverse under it.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::NotAnElement` if `x` is not in `G`.
    pub fn find_inverses_per_operator(&self, x: &E) -> Result<Vec<Option<E>>, StructureError> {
        if !self.contains(x) {
            return Err(StructureError::NotAnElement);
        }
        Ok(self
            .operators
            .iter()
            .map(|op| self.inverse_under(op, x))
            .collect())
    }

    /// An inverse of `x` under the operator at position `index`.
    ///
    /// # Errors
    ///
    /// Returns `StructureError::NoSuchOperator` for an out-of-range `index`
    /// and `StructureError::NotAnElement` if `x` is not in `G`.
    pub fn find_inverse(&self, index: usize, x: &E) -> Result<Option<E>, StructureError> {
        let op = self.operator(index)?;
        if !self.contains(x) {
            return Err(StructureError::NotAnElement);
        }
        Ok(self.inverse_under(op, x))
    }

    fn inverse_under(&self, op: &Operator<E>, x: &E) -> Option<E> {
        let e = laws::neutral_element(&self.elements, op)?;
        laws::inverse_of(&self.elements, op, &e, x)
    }

    /// Whether `G` is closed under `op`.
    ///
    /// The operator need not belong to this structure.
    pub fn is_closed_under(&self, op: &Operator<E>) -> bool {
        laws::closure_witness(&self.elements, op).is_none()
    }

    /// Whether the operator at `mul` distributes over the operator at `add`,
    /// from both sides.
    pub fn is_distributive(&self, add: usize, mul: usize) -> Result<bool, StructureError> {
        let add = self.operator(add)?;
        let mul = self.operator(mul)?;
        Ok(laws::distributivity_witness(&self.elements, add, mul).is_none())
    }

    /// Minimal well-formedness: `G` is closed under every operator.
    ///
    /// Always `true` when closure testing is off.
    pub fn is_valid(&self) -> bool {
        !self.test_for_closure || self.is_closed().into_iter().all(|closed| closed)
    }

    /// Whether `self` is a substructure of `other`.
    ///
    /// This holds when `G_self ⊆ G_other`, `self` has no more operators than
    /// `other`, each operator of `self` agrees with the operator of `other` at
    /// the same position on all of `G_self × G_self`, and `G_self` is closed
    /// under its operators.
    pub fn is_substructure_of(&self, other: &Self) -> bool {
        self.elements.is_subset(&other.elements)
            && self.operators.len() <= other.operators.len()
            && self
                .operators
                .iter()
                .zip(&other.operators)
                .all(|(mine, theirs)| laws::agree_on(&self.elements, mine, theirs))
            && self
                .operators
                .iter()
                .all(|op| laws::closure_witness(&self.elements, op).is_none())
    }

    /// Whether `self` is a substructure of `other` on a strictly smaller set.
    pub fn is_proper_substructure_of(&self, other: &Self) -> bool {
        self.elements.len() < other.elements.len() && self.is_substructure_of(other)
    }

    /// Whether `other` is a substructure of `self`.
    pub fn is_superstructure_of(&self, other: &Self) -> bool {
        other.is_substructure_of(self)
    }

    /// Whether `other` is a proper substructure of `self`.
    pub fn is_proper_superstructure_of(&self, other: &Self) -> bool {
        other.is_proper_substructure_of(self)
    }

    /// Restrict this structure to `subset ∩ G`, keeping the operators.
    pub fn restrict<'a, I>(&self, subset: I) -> Self
    where
        I: IntoIterator<Item = &'a E>,
        E: 'a,
    {
        let elements = subset
            .into_iter()
            .filter(|x| self.elements.contains(*x))
            .cloned()
            .collect();
        Self {
            elements,
            operators: self.operators.clone(),
            test_for_closure: self.test_for_closure,
        }
    }
}

/// Algebraic equality: the same element set, the same number of operators,
/// and operators that agree pointwise on `G × G`.
///
/// Operator identity plays no part; two different closures computing the same
/// table are equal here.
impl<E: Ord + Clone> PartialEq for AlgebraicStructure<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
            && self.operators.len() == other.operators.len()
            && self
                .operators
                .iter()
                .zip(&other.operators)
                .all(|(a, b)| laws::agree_on(&self.elements, a, b))
    }
}

impl<E: fmt::Debug> fmt::Debug for AlgebraicStructure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgebraicStructure")
            .field("elements", &self.elements)
            .field("operators", &self.operators)
            .field("test_for_closure", &self.test_for_closure)
            .finish()
    }
}

impl<E: fmt::Debug> fmt::Display for AlgebraicStructure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(G={:?}", self.elements)?;
        for op in &self.operators {
            write!(f, ", {}", op)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn add_mod(n: u32) -> Operator<u32> {
        Operator::new("+", move |a: &u32, b: &u32| (a + b) % n)
    }

    fn mul_mod(n: u32) -> Operator<u32> {
        Operator::new("*", move |a: &u32, b: &u32| (a * b) % n)
    }

    fn mul() -> Operator<i64> {
        Operator::new("*", |a: &i64, b: &i64| a * b)
    }

    // ---- construction ----

    #[test]
    fn no_operators_is_rejected() {
        let result = AlgebraicStructure::<u32>::new([0, 1], vec![]);
        assert_eq!(result.unwrap_err(), StructureError::NoOperators);
    }

    #[test]
    fn duplicates_collapse() {
        let s = AlgebraicStructure::new([1u32, 1, 0, 2, 0], vec![add_mod(3)]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.elements().iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn operator_lookup() {
        let s = AlgebraicStructure::new([0u32, 1], vec![add_mod(2), mul_mod(2)]).unwrap();
        assert_eq!(s.operator(1).unwrap().name(), "*");
        assert_eq!(
            s.operator(2).unwrap_err(),
            StructureError::NoSuchOperator { index: 2, count: 2 }
        );
    }

    // ---- per-operator checks ----

    #[test]
    fn results_follow_operator_order() {
        let sub = Operator::new("-", |a: &i64, b: &i64| a - b);
        let s = AlgebraicStructure::new(0i64..5, vec![mul(), sub]).unwrap();
        assert_eq!(s.is_closed(), vec![false, false]);
        assert_eq!(s.is_associative(), vec![true, false]);
        assert_eq!(s.is_commutative(), vec![true, false]);
        assert_eq!(s.neutral_elements(), vec![Some(1), None]);
    }

    #[test]
    fn zero_one_under_multiplication() {
        let s = AlgebraicStructure::new([0i64, 1], vec![mul()]).unwrap();
        assert_eq!(s.is_closed(), vec![true]);
        assert_eq!(s.is_commutative(), vec![true]);
        assert_eq!(s.neutral_elements(), vec![Some(1)]);
        assert_eq!(s.find_inverses_per_operator(&0).unwrap(), vec![None]);
        assert_eq!(s.find_inverses_per_operator(&1).unwrap(), vec![Some(1)]);
        assert_eq!(s.has_inverses(), vec![false]);
    }

    #[test]
    fn z4_inverses() {
        let s = AlgebraicStructure::new(0u32..4, vec![add_mod(4), mul_mod(4)]).unwrap();
        assert_eq!(s.neutral_elements(), vec![Some(0), Some(1)]);
        assert_eq!(s.find_inverses_per_operator(&1).unwrap(), vec![Some(3), Some(1)]);
        assert_eq!(s.find_inverses_per_operator(&2).unwrap(), vec![Some(2), None]);
        assert_eq!(s.has_inverses(), vec![true, false]);
        assert_eq!(s.is_distributive(0, 1), Ok(true));
        assert_eq!(s.is_distributive(1, 0), Ok(false));
    }

    #[test]
    fn inverse_of_foreign_value_is_an_error() {
        let s = AlgebraicStructure::new(0u32..4, vec![add_mod(4)]).unwrap();
        assert_eq!(
            s.find_inverses_per_operator(&7).unwrap_err(),
            StructureError::NotAnElement
        );
        assert_eq!(s.find_inverse(0, &7).unwrap_err(), StructureError::NotAnElement);
        assert_eq!(
            s.find_inverse(3, &1).unwrap_err(),
            StructureError::NoSuchOperator { index: 3, count: 1 }
        );
    }

    #[test]
    fn negatives_have_additive_inverses() {
        let add = Operator::new("+", |a: &i64, b: &i64| a + b);
        let s = AlgebraicStructure::new(-9i64..10, vec![add, mul()]).unwrap();
        for i in -9i64..10 {
            assert_eq!(s.find_inverse(0, &i).unwrap(), Some(-i));
        }
        assert_eq!(s.find_inverse(1, &1).unwrap(), Some(1));
        assert_eq!(s.find_inverse(1, &-1).unwrap(), Some(-1));
        assert_eq!(s.find_inverse(1, &2).unwrap(), None);
    }

    // ---- empty set ----

    #[test]
    fn empty_set_is_vacuously_lawful() {
        let s = AlgebraicStructure::new(Vec::<u32>::new(), vec![add_mod(4)]).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.is_closed(), vec![true]);
        assert_eq!(s.is_associative(), vec![true]);
        assert_eq!(s.is_commutative(), vec![true]);
        assert_eq!(s.neutral_elements(), vec![None]);
        assert_eq!(s.has_inverses(), vec![false]);
        assert!(s.is_valid());
    }

    // ---- validity and closure policy ----

    #[test]
    fn validity_requires_closure() {
        let add = Operator::new("+", |a: &i64, b: &i64| a + b);
        let window = AlgebraicStructure::new(-3i64..=3, vec![add]).unwrap();
        assert!(!window.is_valid());

        let window = window.with_closure_test(false);
        assert!(!window.tests_for_closure());
        assert!(window.is_valid());
        assert_eq!(window.is_closed(), vec![false]);
    }

    #[test]
    fn is_closed_under_foreign_operator() {
        let s = AlgebraicStructure::new([0i64, 1], vec![mul()]).unwrap();
        let max = Operator::new("max", |a: &i64, b: &i64| *a.max(b));
        let add = Operator::new("+", |a: &i64, b: &i64| a + b);
        assert!(s.is_closed_under(&max));
        assert!(!s.is_closed_under(&add));
    }

    #[test]
    fn queries_are_repeatable() {
        let s = AlgebraicStructure::new(0u32..6, vec![add_mod(6), mul_mod(6)]).unwrap();
        assert_eq!(s.is_valid(), s.is_valid());
        assert_eq!(s.neutral_elements(), s.neutral_elements());
        assert_eq!(s.has_inverses(), s.has_inverses());
    }

    // ---- equality and substructures ----

    #[test]
    fn equality_is_algebraic() {
        let a = AlgebraicStructure::new(0u32..4, vec![add_mod(4)]).unwrap();
        let other_add = Operator::new("plus", |x: &u32, y: &u32| (x + y) & 3);
        let b = AlgebraicStructure::new([3u32, 2, 1, 0], vec![other_add]).unwrap();
        assert_eq!(a, b);

        let c = AlgebraicStructure::new(0u32..4, vec![mul_mod(4)]).unwrap();
        assert_ne!(a, c);

        let d = AlgebraicStructure::new(0u32..4, vec![add_mod(4), mul_mod(4)]).unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn subgroup_of_z4() {
        let z4 = AlgebraicStructure::new(0u32..4, vec![add_mod(4)]).unwrap();
        let z2 = AlgebraicStructure::new([0u32, 2], vec![add_mod(4)]).unwrap();
        assert!(z2.is_substructure_of(&z4));
        assert!(z2.is_proper_substructure_of(&z4));
        assert!(z4.is_proper_superstructure_of(&z2));
        assert!(z4.is_substructure_of(&z4));
        assert!(!z4.is_proper_substructure_of(&z4));
        assert!(!z4.is_substructure_of(&z2));
    }

    #[test]
    fn unclosed_subset_is_not_a_substructure() {
        let z4 = AlgebraicStructure::new(0u32..4, vec![add_mod(4)]).unwrap();
        let sub = z4.restrict(&[0u32, 1]);
        assert_eq!(sub.len(), 2);
        assert!(!sub.is_substructure_of(&z4));
    }

    #[test]
    fn disagreeing_operators_are_not_substructures() {
        let z4 = AlgebraicStructure::new(0u32..4, vec![add_mod(4)]).unwrap();
        let z2 = AlgebraicStructure::new([0u32, 1], vec![add_mod(2)]).unwrap();
        assert!(!z2.is_substructure_of(&z4));
    }

    #[test]
    fn restrict_ignores_foreign_values() {
        let z4 = AlgebraicStructure::new(0u32..4, vec![add_mod(4)]).unwrap();
        let sub = z4.restrict(&[0u32, 2, 9]);
        assert_eq!(sub.elements().iter().copied().collect::<Vec<_>>(), vec![0, 2]);
    }

    // ---- operator failures ----

    fn panics_on_one_one() -> Operator<u32> {
        Operator::new("boom", |a: &u32, b: &u32| {
            if *a == 1 && *b == 1 {
                panic!("boom")
            } else {
                (a + b) % 3
            }
        })
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn operator_panic_reaches_is_closed() {
        let s = AlgebraicStructure::new(0u32..3, vec![panics_on_one_one()]).unwrap();
        s.is_closed();
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn operator_panic_reaches_inverse_search() {
        // 0 is found neutral without evaluating (1, 1); the inverse search is not.
        let s = AlgebraicStructure::new(0u32..3, vec![panics_on_one_one()]).unwrap();
        let _ = s.find_inverses_per_operator(&1);
    }

    #[test]
    fn display() {
        let s = AlgebraicStructure::new([1u32, 0], vec![add_mod(2), mul_mod(2)]).unwrap();
        assert_eq!(alloc::format!("{}", s), "(G={0, 1}, +, *)");
    }
}
