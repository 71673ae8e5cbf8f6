// Cayley-Dickson algebra engine
// Pure arithmetic over ordered (unit, coefficient) terms; no parsing or I/O.

pub mod error;
pub mod number;
pub mod product;


pub use error::AlgebraError;
pub use number::{standard_units, HypercomplexNumber, Term};
