#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod algebra;
pub mod structures;
pub mod utils;

pub use algebra::field::Field;
pub use algebra::group::{is_abelian_group, is_group};
pub use algebra::group::{AbelianGroup, Group, Monoid, Semigroup, SingleOperator};
pub use algebra::laws::Violation;
pub use algebra::ring::{Ring, TwoOperators};
pub use algebra::shape::Shape;

pub use structures::modular;
pub use structures::operator::{BinaryOperator, Operator};
pub use structures::rational::{possible_rationals, Rational, RationalError};
pub use structures::structure::{AlgebraicStructure, StructureError};
pub use utils::{gcd, is_prime};
