//! Randomised spot checks for structures too large to check exhaustively.
//!
//! Associativity is the cubic check. Sampling triples finds most
//! counterexamples in far fewer operator calls, but a passing spot check is
//! evidence, not proof.

use alloc::vec::Vec;

use rand::Rng;

use crate::algebra::laws::Violation;
use crate::structures::structure::AlgebraicStructure;

/// Test associativity of every operator on `samples` random triples each.
///
/// Returns the first failing triple found. An empty structure always passes.
///
/// # Example
///
/// ```
/// use algebraic_structures::algebra::sampling::spot_check;
/// use algebraic_structures::{AlgebraicStructure, Operator};
///
/// let sub = Operator::new("-", |a: &i64, b: &i64| a - b);
/// let s = AlgebraicStructure::new(-50i64..50, vec![sub]).unwrap();
/// assert!(spot_check(&s, 100, &mut rand::thread_rng()).is_some());
/// ```
pub fn spot_check<E, R>(
    structure: &AlgebraicStructure<E>,
    samples: usize,
    rng: &mut R,
) -> Option<Violation<E>>
where
    E: Ord + Clone,
    R: Rng + ?Sized,
{
    let elements: Vec<&E> = structure.elements().iter().collect();
    if elements.is_empty() {
        return None;
    }
    let pick = |rng: &mut R| elements[rng.gen_range(0..elements.len())];

    for (index, op) in structure.operators().iter().enumerate() {
        for _ in 0..samples {
            let (a, b, c) = (pick(rng), pick(rng), pick(rng));
            if op.apply(&op.apply(a, b), c) != op.apply(a, &op.apply(b, c)) {
                log::debug!("spot check: `{}` is not associative", op.name());
                return Some(Violation::NotAssociative {
                    operator: index,
                    a: a.clone(),
                    b: b.clone(),
                    c: c.clone(),
                });
            }
        }
    }
    None
}
