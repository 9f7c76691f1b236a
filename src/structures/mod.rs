pub mod modular;
pub mod operator;
pub mod rational;
pub mod structure;
