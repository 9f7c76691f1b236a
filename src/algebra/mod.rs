pub mod field;
pub mod group;
pub mod laws;
pub mod ring;
#[cfg(feature = "rand")]
pub mod sampling;
pub mod shape;
